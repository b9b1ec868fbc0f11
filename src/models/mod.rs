//! Domain model types: wall-clock windows, statuses, and the typed
//! upstream feed document.

pub mod schedule;
pub mod time;

pub use schedule::{FeedDocument, Room, WeekdaySchedule};
pub use time::{BuildingStatus, SlotStatus, TimeWindow};
