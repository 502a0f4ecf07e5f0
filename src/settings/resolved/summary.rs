use omnibox::{Browser, Surface};

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!(
		"  Max suggestions: {}",
		config.engine.max_suggestion_size
	);
	println!("  Page turner: {}", config.engine.page_turner);
	println!("  Surface: {}", surface_name(config.engine.surface));
	println!("  Hint: {}", bool_to_word(config.hint));
	if !config.engine.default_suggestion.is_empty() {
		println!(
			"  Default suggestion: {}",
			config.engine.default_suggestion
		);
	}
	if config.no_cache.is_empty() {
		println!("  No-cache queries: (none)");
	} else {
		println!("  No-cache queries: {}", config.no_cache.join(", "));
	}
	println!("  Bookmarks: {}", config.bookmarks.len());
	for shortcut in &config.shortcuts {
		let matcher = shortcut
			.prefix
			.as_deref()
			.map(|prefix| format!("prefix {prefix}"))
			.or_else(|| shortcut.regex.as_deref().map(|regex| format!("regex /{regex}/")))
			.unwrap_or_else(|| "(no matcher)".to_string());
		println!(
			"  Shortcut {}: {matcher}, default search: {}, priority: {}",
			shortcut.name,
			bool_to_word(shortcut.default_search),
			shortcut.priority
		);
	}
}

fn surface_name(surface: Surface) -> &'static str {
	match surface {
		Surface::Webpage => "webpage",
		Surface::Extension(Browser::Chromium) => "chromium",
		Surface::Extension(Browser::Firefox) => "firefox",
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use omnibox::EngineOptions;
	use omnibox_plugins_bookmarks::Bookmark;
	use omnibox_plugins_shortcuts::Shortcut;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			engine: EngineOptions {
				surface: Surface::Extension(Browser::Firefox),
				default_suggestion: "Search".into(),
				..EngineOptions::default()
			},
			hint: false,
			no_cache: vec!["!".into()],
			bookmarks: vec![Bookmark::new("Rust", "https://rust-lang.org/")],
			shortcuts: vec![Shortcut::prefixed(
				"gh:",
				"GitHub",
				"https://github.com/search?q={query}",
			)],
		};

		print_summary(&config);
	}
}
