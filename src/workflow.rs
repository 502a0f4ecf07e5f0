use anyhow::{Context, Result};
use omnibox::{Disposition, EnterOutcome, HeadlessOmnibox, Omnibox, QueryEvent};
use omnibox_plugins_bookmarks::BookmarkHandler;
use omnibox_plugins_shortcuts::Shortcut;
use tracing::{debug, info};

use crate::cli::{OutputFormat, TerminalNavigator, TerminalRender};
use crate::settings::ResolvedConfig;

/// Coordinates building the omnibox and feeding it inputs.
pub(crate) struct OmniboxWorkflow {
    omnibox: Omnibox<TerminalRender, TerminalNavigator>,
}

impl OmniboxWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig, format: OutputFormat) -> Result<Self> {
        let surface = config.engine.surface;
        let hint = config.hint;
        let engine = EngineFactory::build(config)?;
        let mut omnibox = Omnibox::new(
            engine,
            TerminalRender::new(surface, format),
            TerminalNavigator::new(format),
        )
        .with_hint(hint);
        omnibox.bootstrap();
        Ok(Self { omnibox })
    }

    /// Type every input in order, then optionally enter `open`.
    pub(crate) async fn run(
        mut self,
        inputs: &[String],
        open: Option<(&str, Disposition)>,
    ) -> Result<Option<EnterOutcome>> {
        for input in inputs {
            self.omnibox
                .input_changed(input)
                .await
                .with_context(|| format!("search for '{input}' failed"))?;
        }

        let Some((content, disposition)) = open else {
            return Ok(None);
        };
        let outcome = self
            .omnibox
            .input_entered(content, disposition)
            .await
            .with_context(|| format!("failed to open '{content}'"))?;
        Ok(Some(outcome))
    }
}

/// Helper for translating resolved configuration into a configured engine.
struct EngineFactory {
    engine: HeadlessOmnibox,
}

impl EngineFactory {
    fn build(config: ResolvedConfig) -> Result<HeadlessOmnibox> {
        let ResolvedConfig {
            engine,
            hint: _,
            no_cache,
            bookmarks,
            shortcuts,
        } = config;

        info!(bookmarks = bookmarks.len(), shortcuts = shortcuts.len(), "building omnibox");
        let global = BookmarkHandler::new(bookmarks);
        let mut factory = Self {
            engine: HeadlessOmnibox::new(global, engine)?,
        };
        for shortcut in &shortcuts {
            factory = factory.with_shortcut(shortcut)?;
        }
        factory.engine.add_no_cache_queries(no_cache);

        Ok(factory.engine)
    }

    fn with_shortcut(mut self, shortcut: &Shortcut) -> Result<Self> {
        let handler = shortcut.handler()?;
        let mut builder = QueryEvent::builder()
            .name(shortcut.name.clone())
            .handler(handler)
            .default_search(shortcut.default_search)
            .search_priority(shortcut.priority);
        if let Some(icon) = &shortcut.icon {
            builder = builder.icon(icon.clone());
        }

        match (&shortcut.prefix, &shortcut.regex) {
            (Some(prefix), _) => self.engine.add_prefix_query_event(prefix.clone(), builder)?,
            (None, Some(regex)) => self.engine.add_regex_query_event(regex.clone(), builder)?,
            (None, None) => self.engine.add_query_event(builder.build()?),
        }
        debug!(shortcut = %shortcut.name, "registered shortcut");
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use omnibox::EngineOptions;
    use omnibox_plugins_bookmarks::Bookmark;

    use super::*;

    fn config() -> ResolvedConfig {
        let mut docs = Shortcut::prefixed("rs:", "docs.rs", "https://docs.rs/{query}");
        docs.default_search = true;
        ResolvedConfig {
            engine: EngineOptions::default(),
            hint: true,
            no_cache: vec!["!".into()],
            bookmarks: vec![Bookmark::new("Rust", "https://www.rust-lang.org/")],
            shortcuts: vec![docs],
        }
    }

    #[test]
    fn factory_registers_shortcuts_and_no_cache_queries() {
        let engine = EngineFactory::build(config()).expect("engine");
        assert_eq!(engine.query_events().count(), 1);
        assert!(engine.is_no_cache_query("rs:"));
        assert!(engine.is_no_cache_query("!"));
    }

    #[tokio::test]
    async fn entering_a_url_reports_navigation() {
        let workflow = OmniboxWorkflow::from_config(config(), OutputFormat::Json).expect("workflow");
        let outcome = workflow
            .run(
                &["rs:serde".to_string()],
                Some(("https://docs.rs/serde", Disposition::CurrentTab)),
            )
            .await
            .expect("run");

        assert_eq!(
            outcome,
            Some(EnterOutcome::Navigated {
                url: "https://docs.rs/serde".into(),
                disposition: Disposition::CurrentTab,
            })
        );
    }
}
