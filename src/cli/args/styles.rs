use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

use crate::settings::default_config_files;

/// Version banner listing where settings are read from.
pub(super) fn long_version() -> &'static str {
	let mut banner = format!("{}\n\nconfig files (lowest precedence first):", env!("CARGO_PKG_VERSION"));
	let files = default_config_files();
	if files.is_empty() {
		banner.push_str("\n  (none found)");
	}
	for path in files {
		let _ = write!(banner, "\n  {}", path.display());
	}
	let _ = write!(
		banner,
		"\nenvironment: OMNIBOX__<SECTION>__<KEY>\nlog filter: --log-level or RUST_LOG (default {})",
		omnibox::logging::DEFAULT_LEVEL
	);

	Box::leak(banner.into_boxed_str())
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::White.on_default().effects(Effects::ITALIC))
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
