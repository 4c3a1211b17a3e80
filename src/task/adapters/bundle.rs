//! Seed fetcher reading a packaged `todos.json`.

use super::payload::decode_seed_payload;
use crate::task::{
    domain::RemoteTodoRecord,
    ports::{NetworkError, NetworkResult, SeedSource},
};
use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::fmt;
use std::io::ErrorKind;
use std::sync::Arc;
use tracing::debug;

/// Name of the bundled seed file.
pub const BUNDLE_FILE_NAME: &str = "todos.json";

/// Seed source reading [`BUNDLE_FILE_NAME`] from a capability directory.
///
/// The payload schema and error classification match
/// [`HttpSeedFetcher`](super::http::HttpSeedFetcher), except that a missing
/// file is reported as [`NetworkError::FileNotFound`].
#[derive(Clone)]
pub struct BundleSeedFetcher {
    dir: Arc<Dir>,
}

impl BundleSeedFetcher {
    /// Creates a fetcher reading from `dir`.
    #[must_use]
    pub fn new(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    /// Opens `path` with ambient authority and reads the bundle from it.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::FileNotFound`] when the directory does not
    /// exist, or [`NetworkError::Transport`] for other I/O failures.
    pub fn open_ambient(path: &Utf8Path) -> NetworkResult<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|err| classify_io_error(err, path.as_str()))?;
        Ok(Self::new(dir))
    }
}

impl fmt::Debug for BundleSeedFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BundleSeedFetcher")
            .field("file", &BUNDLE_FILE_NAME)
            .finish_non_exhaustive()
    }
}

fn classify_io_error(err: std::io::Error, name: &str) -> NetworkError {
    if err.kind() == ErrorKind::NotFound {
        NetworkError::FileNotFound(name.to_owned())
    } else {
        NetworkError::transport(err)
    }
}

#[async_trait]
impl SeedSource for BundleSeedFetcher {
    async fn fetch_seed_tasks(&self) -> NetworkResult<Vec<RemoteTodoRecord>> {
        let dir = Arc::clone(&self.dir);
        let body = tokio::task::spawn_blocking(move || dir.read(BUNDLE_FILE_NAME))
            .await
            .map_err(NetworkError::transport)?
            .map_err(|err| classify_io_error(err, BUNDLE_FILE_NAME))?;
        let records = decode_seed_payload(&body)?;
        debug!(count = records.len(), "decoded bundled seed todos");
        Ok(records)
    }
}
