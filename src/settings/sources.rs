use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use tracing::debug;

use crate::cli::CliArgs;
use omnibox::app_dirs;

/// Prefix of environment variables mapped onto settings keys.
const ENV_PREFIX: &str = "OMNIBOX";

/// Layer config files, explicit `--config` files and `OMNIBOX__*` variables,
/// later sources overriding earlier ones.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let optional = if cli.no_config {
        Vec::new()
    } else {
        default_config_files()
    };

    let mut builder = Config::builder();
    for path in optional {
        debug!(path = %path.display(), "optional config file");
        builder = builder.add_source(File::from(path).required(false));
    }
    for path in &cli.config {
        debug!(path = %path.display(), "explicit config file");
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("engine.no_cache"),
        )
        .build()
        .context("failed to merge configuration sources")
}

/// Config file locations consulted unless `--no-config` is given, lowest
/// precedence first.
pub(crate) fn default_config_files() -> Vec<PathBuf> {
    let user = app_dirs::get_config_dir()
        .ok()
        .map(|dir| dir.join("config.toml"));
    let local = env::current_dir()
        .ok()
        .into_iter()
        .flat_map(|dir| [dir.join(".omnibox.toml"), dir.join("omnibox.toml")]);
    user.into_iter().chain(local).collect()
}
