use omnibox::Surface;
use omnibox_plugins_shortcuts::{QUERY_PLACEHOLDER, Shortcut};

use super::errors::ShortcutProblem;
use super::{ConfigError, ConfigSources, EngineSetting, ResolvedConfig, SettingSource};
use crate::cli::parse_surface;

pub(crate) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.engine.max_suggestion_size == 0 {
		let setting = EngineSetting::MaxSuggestionSize;
		return Err(ConfigError::invalid(
			setting,
			"0",
			sources.origin(setting),
			"must be at least 1",
		));
	}

	for (position, shortcut) in config.shortcuts.iter().enumerate() {
		if let Some(problem) = shortcut_problem(shortcut) {
			return Err(ConfigError::Shortcut {
				position: position + 1,
				name: shortcut.name.clone(),
				problem,
			});
		}
	}

	Ok(())
}

fn shortcut_problem(shortcut: &Shortcut) -> Option<ShortcutProblem> {
	match (&shortcut.prefix, &shortcut.regex) {
		(Some(_), Some(_)) | (None, None) => return Some(ShortcutProblem::MatcherCount),
		(Some(prefix), None) if prefix.trim().is_empty() => {
			return Some(ShortcutProblem::EmptyPrefix);
		}
		_ => {}
	}
	(!shortcut.url.contains(QUERY_PLACEHOLDER)).then_some(ShortcutProblem::MissingPlaceholder)
}

/// Parse the page-turner sigil: exactly one non-whitespace character.
pub(crate) fn page_turner(value: &str, origin: SettingSource) -> Result<char, ConfigError> {
	let mut chars = value.chars();
	match (chars.next(), chars.next()) {
		(Some(sigil), None) if !sigil.is_whitespace() => Ok(sigil),
		_ => Err(ConfigError::invalid(
			EngineSetting::PageTurner,
			value,
			origin,
			"must be exactly one non-whitespace character",
		)),
	}
}

pub(crate) fn surface(value: &str, origin: SettingSource) -> Result<Surface, ConfigError> {
	parse_surface(value).ok_or_else(|| {
		ConfigError::invalid(
			EngineSetting::Surface,
			value,
			origin,
			"expected one of webpage, chromium, firefox",
		)
	})
}
