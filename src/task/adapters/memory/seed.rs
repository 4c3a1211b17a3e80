//! Seed source answering from a preset result.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::task::{
    domain::RemoteTodoRecord,
    ports::{NetworkError, NetworkResult, SeedSource},
};

/// Seed source that returns a fixed outcome and counts fetches.
#[derive(Debug, Clone)]
pub struct InMemorySeedSource {
    outcome: Result<Vec<RemoteTodoRecord>, NetworkError>,
    fetches: Arc<AtomicUsize>,
}

impl InMemorySeedSource {
    /// Creates a source that yields `records` on every fetch.
    #[must_use]
    pub fn with_records(records: Vec<RemoteTodoRecord>) -> Self {
        Self {
            outcome: Ok(records),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a source whose fetches fail with `error`.
    #[must_use]
    pub fn failing(error: NetworkError) -> Self {
        Self {
            outcome: Err(error),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns how many fetches have been issued.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeedSource for InMemorySeedSource {
    async fn fetch_seed_tasks(&self) -> NetworkResult<Vec<RemoteTodoRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
