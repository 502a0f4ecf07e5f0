//! Configuration loading and resolution utilities.
//!
//! [`load`] layers config files, `OMNIBOX__*` environment variables and CLI
//! flags, then validates the result into a [`ResolvedConfig`].

mod raw;
mod resolved;
mod sources;

use anyhow::{Context, Result};
use tracing::debug;

pub use resolved::ResolvedConfig;
pub(crate) use sources::default_config_files;

use crate::cli::CliArgs;
use raw::RawConfig;

/// Load the effective settings for one invocation.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let mut raw: RawConfig = sources::build_config(cli)?
        .try_deserialize()
        .context("configuration does not match the omnibox settings layout")?;
    raw.apply_cli_overrides(cli);
    let config = raw.resolve(cli)?;
    debug!(
        page_size = config.engine.max_suggestion_size,
        bookmarks = config.bookmarks.len(),
        shortcuts = config.shortcuts.len(),
        no_cache = config.no_cache.len(),
        "settings resolved"
    );
    Ok(config)
}
