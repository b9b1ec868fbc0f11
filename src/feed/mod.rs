//! Upstream schedule feed collaborator.
//!
//! The feed is the single external dependency of a request: one bounded
//! HTTP GET per inbound request, no caching, no retries. Handlers hold it
//! as an `Arc<dyn ClassroomFeed>` so tests can substitute a stub.

mod http;

pub use http::HttpFeed;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::FeedDocument;

/// Errors from the upstream feed. All of them are fatal for the request;
/// no partial results are assembled.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network failure or timeout reaching the feed.
    #[error("feed transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Feed answered with a non-success status.
    #[error("feed returned HTTP {0}")]
    Status(u16),
    /// Feed payload (outer document or nested slot string) did not parse.
    #[error("malformed feed payload: {0}")]
    Malformed(String),
}

/// Source of campus schedule snapshots.
#[async_trait]
pub trait ClassroomFeed: Send + Sync {
    async fn fetch(&self) -> Result<FeedDocument, FeedError>;
}
