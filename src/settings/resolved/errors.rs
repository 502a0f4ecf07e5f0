use thiserror::Error;

use super::{EngineSetting, SettingSource};

/// Why a configured shortcut cannot be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ShortcutProblem {
	#[error("needs exactly one of `prefix` or `regex`")]
	MatcherCount,
	#[error("prefix must not be empty")]
	EmptyPrefix,
	#[error("url must contain the {{query}} placeholder")]
	MissingPlaceholder,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
	Invalid {
		key: &'static str,
		value: String,
		origin: SettingSource,
		reason: &'static str,
	},
	#[error("shortcut #{position} `{name}`: {problem}")]
	Shortcut {
		position: usize,
		name: String,
		problem: ShortcutProblem,
	},
}

impl ConfigError {
	pub(crate) fn invalid(
		setting: EngineSetting,
		value: impl Into<String>,
		origin: SettingSource,
		reason: &'static str,
	) -> Self {
		Self::Invalid {
			key: setting.key(),
			value: value.into(),
			origin,
			reason,
		}
	}
}
