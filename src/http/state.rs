//! Application state for the HTTP server.

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};

use crate::config::Config;
use crate::feed::ClassroomFeed;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream schedule feed, fetched once per request
    pub feed: Arc<dyn ClassroomFeed>,
    /// Immutable runtime configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state with the given feed and configuration.
    pub fn new(feed: Arc<dyn ClassroomFeed>, config: Arc<Config>) -> Self {
        Self { feed, config }
    }

    /// Current wall-clock date-time in the campus timezone.
    ///
    /// Handlers call this exactly once per request and thread the value
    /// through the pure pipeline, so a request sees a single consistent
    /// "now".
    pub fn campus_now(&self) -> NaiveDateTime {
        Utc::now()
            .with_timezone(&self.config.campus_offset)
            .naive_local()
    }
}
