use std::collections::HashSet;

use serde::Deserialize;

use crate::cli::CliArgs;

/// Engine options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct EngineSection {
    pub(super) max_suggestion_size: Option<usize>,
    pub(super) page_turner: Option<String>,
    pub(super) default_suggestion: Option<String>,
    pub(super) hint: Option<bool>,
    pub(super) surface: Option<String>,
    pub(super) no_cache: Option<Vec<String>>,
}

impl EngineSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(value) = cli.max_suggestions {
            self.max_suggestion_size = Some(value);
        }
        if let Some(value) = cli.page_turner.clone() {
            self.page_turner = Some(value);
        }
        if let Some(surface) = cli.surface {
            self.surface = Some(surface.as_str().to_string());
        }
        if cli.no_hint {
            self.hint = Some(false);
        }
    }

    /// Trimmed no-cache queries in first-seen order, without blanks or repeats.
    pub(super) fn no_cache_queries(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.no_cache
            .iter()
            .flatten()
            .map(|query| query.trim())
            .filter(|query| !query.is_empty() && seen.insert(*query))
            .map(str::to_owned)
            .collect()
    }
}
