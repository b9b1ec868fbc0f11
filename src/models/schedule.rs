// ============================================================================
// Upstream feed document and boundary decoding
// ============================================================================
//
// The campus portal returns a GeoJSON-like document whose per-building
// `openClassroomSlots` property is itself a JSON-encoded string. Everything
// is decoded into typed structures here, once, so the service layer never
// sees untyped JSON.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use serde::Deserialize;

use crate::models::TimeWindow;

/// Top-level feed document: `{data: {features: [...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument {
    pub data: FeedData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedData {
    #[serde(default)]
    pub features: Vec<BuildingFeature>,
}

/// One building entry of the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingFeature {
    pub properties: BuildingProperties,
    #[serde(default)]
    pub geometry: BuildingGeometry,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingProperties {
    #[serde(default)]
    pub building_name: String,
    #[serde(default)]
    pub building_code: String,
    /// JSON-encoded string holding the per-room schedule document; absent
    /// (or empty) when the feed has no slot data for the building.
    #[serde(default)]
    pub open_classroom_slots: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildingGeometry {
    /// Feed order: `[lng, lat]`.
    #[serde(default)]
    pub coordinates: [f64; 2],
}

/// A room with its decoded weekly schedule.
#[derive(Debug, Clone)]
pub struct Room {
    pub room_number: String,
    pub schedule: WeekdaySchedule,
}

/// Ordered weekday-name -> windows mapping, immutable after decoding.
///
/// Lookup takes the first entry whose name matches; the feed is assumed to
/// carry at most one entry per weekday.
#[derive(Debug, Clone, Default)]
pub struct WeekdaySchedule {
    days: Vec<(String, Vec<TimeWindow>)>,
}

impl WeekdaySchedule {
    pub fn new(days: Vec<(String, Vec<TimeWindow>)>) -> Self {
        Self { days }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TimeWindow])> {
        self.days
            .iter()
            .map(|(name, windows)| (name.as_str(), windows.as_slice()))
    }
}

// Wire shapes of the nested `openClassroomSlots` payload.

#[derive(Debug, Deserialize)]
struct RoomSlotsDocument {
    #[serde(default)]
    data: Vec<RawRoom>,
}

#[derive(Debug, Deserialize)]
struct RawRoom {
    #[serde(rename = "roomNumber")]
    room_number: String,
    #[serde(rename = "Schedule", default)]
    schedule: Vec<RawDay>,
}

#[derive(Debug, Deserialize)]
struct RawDay {
    #[serde(rename = "Weekday")]
    weekday: String,
    #[serde(rename = "Slots", default)]
    slots: Vec<RawSlot>,
}

#[derive(Debug, Deserialize)]
struct RawSlot {
    #[serde(rename = "StartTime")]
    start_time: String,
    #[serde(rename = "EndTime")]
    end_time: String,
}

/// Decode a building's nested `openClassroomSlots` payload into typed rooms.
///
/// A malformed payload is an upstream fault, not a degradation; callers
/// treat the error as fatal for the request.
pub fn decode_room_slots(payload: &str) -> Result<Vec<Room>> {
    let document: RoomSlotsDocument =
        serde_json::from_str(payload).context("invalid openClassroomSlots payload")?;
    document.data.into_iter().map(decode_room).collect()
}

fn decode_room(raw: RawRoom) -> Result<Room> {
    let mut days = Vec::with_capacity(raw.schedule.len());
    for day in raw.schedule {
        let windows = day
            .slots
            .iter()
            .map(parse_window)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("room {}, {}", raw.room_number, day.weekday))?;
        days.push((day.weekday, windows));
    }
    Ok(Room {
        room_number: raw.room_number,
        schedule: WeekdaySchedule::new(days),
    })
}

fn parse_window(raw: &RawSlot) -> Result<TimeWindow> {
    Ok(TimeWindow::new(
        parse_time_of_day(&raw.start_time)?,
        parse_time_of_day(&raw.end_time)?,
    ))
}

fn parse_time_of_day(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .with_context(|| format!("invalid time of day {raw:?}"))
}
