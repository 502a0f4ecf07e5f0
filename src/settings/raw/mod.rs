use anyhow::{Error, Result};
use omnibox::{EngineOptions, PAGE_TURNER, Surface};
use omnibox_plugins_bookmarks::Bookmark;
use omnibox_plugins_shortcuts::Shortcut;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, EngineSetting, ResolvedConfig, validation};

mod engine;

use engine::EngineSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    engine: EngineSection,
    bookmarks: Vec<Bookmark>,
    shortcuts: Vec<Shortcut>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.engine.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let mut sources = ConfigSources::default();
        sources.detect(
            EngineSetting::MaxSuggestionSize,
            cli.max_suggestions.is_some(),
            self.engine.max_suggestion_size.is_some(),
        );
        sources.detect(
            EngineSetting::PageTurner,
            cli.page_turner.is_some(),
            self.engine.page_turner.is_some(),
        );
        sources.detect(
            EngineSetting::Surface,
            cli.surface.is_some(),
            self.engine.surface.is_some(),
        );
        let no_cache = self.engine.no_cache_queries();

        let EngineSection {
            max_suggestion_size,
            page_turner,
            default_suggestion,
            hint,
            surface,
            ..
        } = self.engine;

        let page_turner = match page_turner {
            Some(value) => validation::page_turner(&value, sources.origin(EngineSetting::PageTurner))
                .map_err(Error::new)?,
            None => PAGE_TURNER,
        };
        let surface = match surface {
            Some(value) => validation::surface(&value, sources.origin(EngineSetting::Surface))
                .map_err(Error::new)?,
            None => Surface::default(),
        };

        let engine = EngineOptions {
            max_suggestion_size: max_suggestion_size
                .unwrap_or(omnibox::DEFAULT_MAX_SUGGESTION_SIZE),
            page_turner,
            default_suggestion: default_suggestion.unwrap_or_default(),
            surface,
        };

        let config = ResolvedConfig {
            engine,
            hint: hint.unwrap_or(true),
            no_cache,
            bookmarks: self.bookmarks,
            shortcuts: self.shortcuts,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests;
