//! Tracing subscriber setup for embedders that do not install their own.

use tracing_subscriber::EnvFilter;

/// Installs a compact fmt subscriber. `RUST_LOG` takes precedence; otherwise
/// the level is `debug` when `verbose` and `info` when not.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_tracing(verbose: bool) -> bool {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
