use clap::Parser;
use omnibox::{Browser, Surface};

use super::RawConfig;
use crate::cli::CliArgs;

fn raw_from_toml(source: &str) -> RawConfig {
    config::Config::builder()
        .add_source(config::File::from_str(source, config::FileFormat::Toml))
        .build()
        .expect("config")
        .try_deserialize()
        .expect("deserialize")
}

#[test]
fn cli_overrides_take_precedence() {
    let cli = CliArgs::parse_from([
        "omnibox",
        "--max-suggestions",
        "4",
        "--page-turner",
        "+",
        "--surface",
        "chromium",
        "--no-hint",
    ]);

    let mut config = RawConfig::default();
    config.engine.max_suggestion_size = Some(10);
    config.apply_cli_overrides(&cli);

    assert_eq!(config.engine.max_suggestion_size, Some(4));
    assert_eq!(config.engine.page_turner.as_deref(), Some("+"));
    assert_eq!(config.engine.surface.as_deref(), Some("chromium"));
    assert_eq!(config.engine.hint, Some(false));
}

#[test]
fn toml_sections_resolve_into_engine_options() {
    let raw = raw_from_toml(
        r#"
        [engine]
        max_suggestion_size = 5
        page_turner = "+"
        default_suggestion = "Search bookmarks"
        surface = "firefox"
        no_cache = [" ! ", "!"]

        [[bookmarks]]
        title = "Rust Book"
        url = "https://doc.rust-lang.org/book/"
        tags = ["rust"]

        [[shortcuts]]
        prefix = "gh:"
        name = "GitHub"
        url = "https://github.com/search?q={query}"
        "#,
    );
    let cli = CliArgs::parse_from(["omnibox"]);

    let resolved = raw.resolve(&cli).expect("resolve");
    assert_eq!(resolved.engine.max_suggestion_size, 5);
    assert_eq!(resolved.engine.page_turner, '+');
    assert_eq!(resolved.engine.default_suggestion, "Search bookmarks");
    assert_eq!(resolved.engine.surface, Surface::Extension(Browser::Firefox));
    assert!(resolved.hint);
    assert_eq!(resolved.no_cache, vec!["!"]);
    assert_eq!(resolved.bookmarks.len(), 1);
    assert_eq!(resolved.shortcuts[0].prefix.as_deref(), Some("gh:"));
}

#[test]
fn multi_character_page_turner_is_rejected() {
    let cli = CliArgs::parse_from(["omnibox", "--page-turner=ab"]);
    let mut raw = RawConfig::default();
    raw.apply_cli_overrides(&cli);

    let err = raw.resolve(&cli).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("engine.page_turner"));
    assert!(message.contains("CLI flag"));
}
