//! Public API surface for the backend.
//!
//! This file consolidates the response DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::{BuildingStatus, SlotStatus, TimeWindow};

/// One surviving (non-passed) window with its classification, serialized
/// with the feed's original key casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSlot {
    #[serde(rename = "StartTime")]
    pub start_time: NaiveTime,
    #[serde(rename = "EndTime")]
    pub end_time: NaiveTime,
    #[serde(rename = "Status")]
    pub status: SlotStatus,
}

impl AnnotatedSlot {
    pub fn new(window: TimeWindow, status: SlotStatus) -> Self {
        Self {
            start_time: window.start,
            end_time: window.end,
            status,
        }
    }
}

/// Per-room result: today's surviving slots in feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomResult {
    pub slots: Vec<AnnotatedSlot>,
}

/// One building entry of the response list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingResult {
    #[serde(rename = "building")]
    pub name: String,
    pub building_code: String,
    pub building_status: BuildingStatus,
    pub rooms: BTreeMap<String, RoomResult>,
    /// Coordinates in feed order, `[lng, lat]`.
    pub coords: [f64; 2],
    /// Kilometres from the caller; `0` when no location was supplied,
    /// in which case the list is not distance-sorted.
    pub distance: f64,
}
