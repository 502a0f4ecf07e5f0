//! Diagnostic logging for the `omnibox` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the embedder. The binary calls [`initialize`] once at startup.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Install a stderr subscriber.
///
/// `level` overrides `RUST_LOG` when present. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn initialize(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}
