//! Seed source port for first-run population of an empty store.

use crate::task::domain::RemoteTodoRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for seed fetches.
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Source of the records used to seed an empty task store.
///
/// A fetch is a single future that resolves exactly once, either with the
/// decoded records or with a classified failure. Dropping the future
/// abandons the fetch. Sources never write to the task store; mapping and
/// persistence belong to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Fetches and decodes the seed records, in payload order.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] variant classifying the failure.
    async fn fetch_seed_tasks(&self) -> NetworkResult<Vec<RemoteTodoRecord>>;
}

/// Errors returned by seed sources.
#[derive(Debug, Clone, Error)]
pub enum NetworkError {
    /// The request could not be completed (connection, timeout, I/O).
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-2xx status.
    #[error("unexpected response status {0}")]
    BadStatus(u16),

    /// The response or file body was empty.
    #[error("no data received")]
    NoData,

    /// The body did not match the expected `{ "todos": [...] }` shape.
    #[error("failed to decode seed payload: {0}")]
    DecodeFailure(Arc<dyn std::error::Error + Send + Sync>),

    /// The bundled seed file does not exist.
    #[error("seed file not found: {0}")]
    FileNotFound(String),
}

impl NetworkError {
    /// Wraps a transport-layer error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::DecodeFailure(Arc::new(err))
    }
}
