//! Adapter implementations of the task ports.
//!
//! - [`memory`]: in-process store, reminder scheduler, and seed source
//! - [`sqlite`]: Diesel-backed durable store
//! - [`http`]: remote seed fetcher
//! - [`bundle`]: packaged `todos.json` seed reader
//! - [`ids`]: identifier generators

pub mod bundle;
pub mod http;
pub mod ids;
pub mod memory;
mod payload;
pub mod sqlite;

use crate::config::{SeedConfig, SeedSourceKind};
use crate::task::ports::{NetworkError, NetworkResult, SeedSource};
use camino::Utf8Path;
use std::sync::Arc;

/// Builds the seed source selected by `config`.
///
/// # Errors
///
/// Returns [`NetworkError::Transport`] when the HTTP client cannot be built,
/// or [`NetworkError::FileNotFound`] when the bundle directory cannot be
/// opened.
pub fn seed_source_from_config(config: &SeedConfig) -> NetworkResult<Arc<dyn SeedSource>> {
    match config.source {
        SeedSourceKind::Remote => {
            let fetcher = http::HttpSeedFetcher::new(config.url.clone(), config.timeout())?;
            Ok(Arc::new(fetcher))
        }
        SeedSourceKind::Bundle => {
            let dir = config.bundle_dir.as_deref().ok_or_else(|| {
                NetworkError::FileNotFound(bundle::BUNDLE_FILE_NAME.to_owned())
            })?;
            let fetcher = bundle::BundleSeedFetcher::open_ambient(Utf8Path::new(dir))?;
            Ok(Arc::new(fetcher))
        }
    }
}
