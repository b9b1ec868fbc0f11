//! Business logic: pure availability computations over feed snapshots.
//!
//! Everything here takes the request's "now" as an explicit parameter;
//! nothing reads the clock or performs I/O.

pub mod classify;
pub mod geo;
pub mod pipeline;
pub mod rollup;
pub mod schedule;

pub use classify::classify_slot;
pub use geo::haversine;
pub use pipeline::{evaluate_campus, CallerLocation};
pub use rollup::aggregate_building;
pub use schedule::{evaluate_room, select_today, RoomFlags};
