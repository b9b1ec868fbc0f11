//! Today-window selection and per-room evaluation.

use chrono::NaiveTime;

use super::classify::classify_slot;
use crate::api::{AnnotatedSlot, RoomResult};
use crate::models::{SlotStatus, TimeWindow, WeekdaySchedule};

/// Flags a room contributes to the building rollup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomFlags {
    pub saw_available: bool,
    pub saw_upcoming: bool,
    /// Set only for windows later today beyond the upcoming horizon.
    pub saw_future_unavailable: bool,
}

/// Windows applicable today: the first schedule entry whose weekday name
/// matches exactly (case-sensitive full English name). Missing data
/// degrades to "no windows today" rather than an error.
pub fn select_today<'a>(schedule: &'a WeekdaySchedule, weekday: &str) -> &'a [TimeWindow] {
    schedule
        .iter()
        .find(|(name, _)| **name == *weekday)
        .map(|(_, windows)| windows)
        .unwrap_or(&[])
}

/// Classify every window, filter out `Passed`, and accumulate rollup flags.
///
/// Surviving windows keep their original order. A room with no windows
/// today yields an empty result with all flags false.
pub fn evaluate_room(windows: &[TimeWindow], now: NaiveTime) -> (RoomResult, RoomFlags) {
    let mut flags = RoomFlags::default();
    let mut slots = Vec::with_capacity(windows.len());

    for window in windows {
        let status = classify_slot(now, window);
        match status {
            SlotStatus::Available => flags.saw_available = true,
            SlotStatus::Upcoming => flags.saw_upcoming = true,
            SlotStatus::Unavailable => flags.saw_future_unavailable = true,
            SlotStatus::Passed => {}
        }
        if status != SlotStatus::Passed {
            slots.push(AnnotatedSlot::new(*window, status));
        }
    }

    (RoomResult { slots }, flags)
}
