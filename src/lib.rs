//! # Open Classrooms Backend
//!
//! Campus classroom availability service.
//!
//! This crate answers "which classrooms and buildings are open right now":
//! it fetches the campus portal's schedule feed, classifies each room's
//! scheduled windows against the current campus-local time, rolls room
//! statuses up into a per-building status, and optionally ranks buildings
//! by distance to a caller-supplied location.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: response DTOs for the HTTP API
//! - [`models`]: domain types and the typed upstream feed document
//! - [`services`]: pure availability logic (classification, rollup,
//!   distance, per-request pipeline)
//! - [`feed`]: the upstream feed collaborator behind a trait
//! - [`http`]: axum-based HTTP server and request handlers
//! - [`config`]: environment-variable configuration
//!
//! Requests are stateless: one upstream fetch, one "now", purely in-memory
//! transformation, nothing persisted or cached across requests.

pub mod api;
pub mod config;
pub mod feed;
pub mod http;
pub mod models;
pub mod services;
