//! reqwest-backed feed client.

use std::time::Duration;

use async_trait::async_trait;

use super::{ClassroomFeed, FeedError};
use crate::models::FeedDocument;

/// HTTP client for the campus open-classrooms feed.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpFeed {
    /// Build a client with a fixed per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ClassroomFeed for HttpFeed {
    async fn fetch(&self) -> Result<FeedDocument, FeedError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }
        response
            .json::<FeedDocument>()
            .await
            .map_err(|e| FeedError::Malformed(e.to_string()))
    }
}
