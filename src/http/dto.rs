//! Request/response DTOs for the HTTP API.
//!
//! The building-list response types live in [`crate::api`]; this module
//! only holds the HTTP-specific shapes.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/open-classrooms`.
///
/// Both fields are required by the API; they are optional here so handler
/// validation can produce the API's own error message instead of a raw
/// deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationRequest {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// Response for `GET /api/test`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResponse {
    pub message: String,
}
