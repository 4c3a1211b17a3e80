//! HTTP seed fetcher.

use super::payload::decode_seed_payload;
use crate::task::{
    domain::RemoteTodoRecord,
    ports::{NetworkError, NetworkResult, SeedSource},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Resource the seed list is downloaded from unless configured otherwise.
pub const DEFAULT_SEED_URL: &str = "https://dummyjson.com/todos";

/// Request timeout applied unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Seed source performing a single `GET` against a fixed URL.
///
/// No retries and no caching: every call issues one request.
#[derive(Debug, Clone)]
pub struct HttpSeedFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpSeedFetcher {
    /// Creates a fetcher for `url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Transport`] when the HTTP client cannot be
    /// initialised.
    pub fn new(url: impl Into<String>, timeout: Duration) -> NetworkResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(NetworkError::transport)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Creates a fetcher for [`DEFAULT_SEED_URL`] with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Transport`] when the HTTP client cannot be
    /// initialised.
    pub fn with_defaults() -> NetworkResult<Self> {
        Self::new(DEFAULT_SEED_URL, DEFAULT_TIMEOUT)
    }

    /// Returns the URL requests are sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SeedSource for HttpSeedFetcher {
    async fn fetch_seed_tasks(&self) -> NetworkResult<Vec<RemoteTodoRecord>> {
        debug!(url = %self.url, "requesting seed todos");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(NetworkError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(NetworkError::transport)?;
        let records = decode_seed_payload(&body)?;
        debug!(count = records.len(), "decoded seed todos");
        Ok(records)
    }
}
