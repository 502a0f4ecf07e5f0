use omnibox::EngineOptions;
use omnibox_plugins_bookmarks::Bookmark;
use omnibox_plugins_shortcuts::Shortcut;

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, EngineSetting, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub engine: EngineOptions,
	pub hint: bool,
	pub no_cache: Vec<String>,
	pub bookmarks: Vec<Bookmark>,
	pub shortcuts: Vec<Shortcut>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
