//! Classification of a single schedule window against the current time.

use chrono::NaiveTime;

use crate::models::{SlotStatus, TimeWindow};

/// A window starting within this many seconds (strictly between 0 and the
/// horizon) is `Upcoming` rather than `Unavailable`.
const UPCOMING_HORIZON_SECS: i64 = 20 * 60;

/// Classify one window against `now`.
///
/// The all-day sentinel (`start == end`) short-circuits to `Available`
/// before any comparison. Both bounds of the upcoming horizon are strict:
/// a window starting right now is `Available`, one starting in exactly
/// 20 minutes is `Unavailable`.
///
/// Windows wrapping past midnight (`end < start`, non-sentinel) are outside
/// the same-day model; the raw comparisons below decide them.
pub fn classify_slot(now: NaiveTime, window: &TimeWindow) -> SlotStatus {
    if window.is_all_day() {
        return SlotStatus::Available;
    }

    let until_start = (window.start - now).num_seconds();
    if until_start > 0 && until_start < UPCOMING_HORIZON_SECS {
        SlotStatus::Upcoming
    } else if window.start <= now && now <= window.end {
        SlotStatus::Available
    } else if now > window.end {
        SlotStatus::Passed
    } else {
        SlotStatus::Unavailable
    }
}
