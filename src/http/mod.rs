//! HTTP server module for the open-classrooms backend.
//!
//! This module provides an axum-based HTTP server that exposes the
//! availability pipeline as a small REST API: request parsing and
//! validation, JSON serialization, CORS, and error mapping live here;
//! all decision logic stays in [`crate::services`].

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
