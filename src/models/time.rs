use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A scheduled opening window within a single day.
///
/// Both bounds are wall-clock times with second precision. A window whose
/// start equals its end is the feed's "open all day" sentinel, not a
/// zero-length window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Whether this window carries the all-day sentinel (`start == end`).
    pub fn is_all_day(&self) -> bool {
        self.start == self.end
    }
}

/// Classification of one window against the current time.
///
/// `Passed` never leaves the evaluation layer; responses only ever carry
/// the other three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Upcoming,
    Unavailable,
    Passed,
}

/// Building-level rollup status.
///
/// Declared in ascending precedence so the rollup fold is a plain `max`:
/// a later room can upgrade the running status but never downgrade it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingStatus {
    Unavailable,
    Upcoming,
    Available,
}
