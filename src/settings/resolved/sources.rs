use std::env;
use std::fmt;

/// Engine settings whose origin is reported when they fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EngineSetting {
	MaxSuggestionSize,
	PageTurner,
	Surface,
}

impl EngineSetting {
	pub(crate) const fn key(self) -> &'static str {
		match self {
			Self::MaxSuggestionSize => "engine.max_suggestion_size",
			Self::PageTurner => "engine.page_turner",
			Self::Surface => "engine.surface",
		}
	}

	const fn env_var(self) -> &'static str {
		match self {
			Self::MaxSuggestionSize => "OMNIBOX__ENGINE__MAX_SUGGESTION_SIZE",
			Self::PageTurner => "OMNIBOX__ENGINE__PAGE_TURNER",
			Self::Surface => "OMNIBOX__ENGINE__SURFACE",
		}
	}

	const fn cli_flag(self) -> &'static str {
		match self {
			Self::MaxSuggestionSize => "--max-suggestions",
			Self::PageTurner => "--page-turner",
			Self::Surface => "--surface",
		}
	}
}

/// Where the effective value of a setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the engine settings that were set explicitly.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	explicit: Vec<(EngineSetting, SettingSource)>,
}

impl ConfigSources {
	/// Record where `setting` came from, if it was set at all.
	///
	/// A CLI flag wins, then the matching `OMNIBOX__ENGINE__*` variable; any
	/// other value must have been read from a config file.
	pub(crate) fn detect(&mut self, setting: EngineSetting, from_cli: bool, present: bool) {
		if !present {
			return;
		}
		let source = if from_cli {
			SettingSource::CliFlag(setting.cli_flag())
		} else if env::var_os(setting.env_var()).is_some() {
			SettingSource::Environment(setting.env_var())
		} else {
			SettingSource::ConfigKey(setting.key())
		};
		self.record(setting, source);
	}

	pub(crate) fn record(&mut self, setting: EngineSetting, source: SettingSource) {
		self.explicit.retain(|(known, _)| *known != setting);
		self.explicit.push((setting, source));
	}

	/// Origin used in error messages; defaults to the config key.
	#[must_use]
	pub(crate) fn origin(&self, setting: EngineSetting) -> SettingSource {
		self.explicit
			.iter()
			.find(|(known, _)| *known == setting)
			.map_or(SettingSource::ConfigKey(setting.key()), |(_, source)| *source)
	}
}
