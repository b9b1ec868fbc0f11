//! Building-level status rollup.

use super::schedule::RoomFlags;
use crate::models::BuildingStatus;

/// Strongest status a single room's flags justify.
fn contribution(flags: &RoomFlags) -> BuildingStatus {
    if flags.saw_available {
        BuildingStatus::Available
    } else if flags.saw_upcoming {
        BuildingStatus::Upcoming
    } else {
        BuildingStatus::Unavailable
    }
}

/// Fold per-room flags into one building status.
///
/// `BuildingStatus` orders `Unavailable < Upcoming < Available`, so the
/// fold is a monotonic max: a room can upgrade the running status, never
/// downgrade it, and the result is independent of room order. No rooms
/// (or no flags at all) yields `Unavailable`, the universal default —
/// there is no separate "closed" state.
pub fn aggregate_building<'a, I>(rooms: I) -> BuildingStatus
where
    I: IntoIterator<Item = &'a RoomFlags>,
{
    rooms
        .into_iter()
        .map(contribution)
        .fold(BuildingStatus::Unavailable, std::cmp::Ord::max)
}
