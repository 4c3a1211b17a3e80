//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs a formatted `tracing` subscriber for the process.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` is used, and an
/// unparsable directive falls back to `info`. Returns `false` when a global
/// subscriber was already installed, which leaves the existing one active.
#[must_use]
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
