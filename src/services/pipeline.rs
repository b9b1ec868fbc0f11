//! Request-scoped evaluation pipeline over an upstream feed snapshot.

use std::collections::BTreeMap;

use chrono::NaiveTime;

use super::{geo, rollup, schedule};
use crate::api::BuildingResult;
use crate::feed::FeedError;
use crate::models::schedule::{decode_room_slots, BuildingFeature};
use crate::models::{BuildingStatus, FeedDocument};

/// Caller-supplied location used for distance ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallerLocation {
    pub lat: f64,
    pub lng: f64,
}

/// Evaluate every building in the feed snapshot against `now`.
///
/// `weekday` is the full English weekday name for `now` in the campus
/// timezone; both are computed once per request by the caller. With a
/// caller location the result is stable-sorted ascending by distance;
/// otherwise it stays in feed order and every distance is the `0` sentinel.
pub fn evaluate_campus(
    feed: &FeedDocument,
    now: NaiveTime,
    weekday: &str,
    caller: Option<CallerLocation>,
) -> Result<Vec<BuildingResult>, FeedError> {
    let mut buildings = Vec::with_capacity(feed.data.features.len());
    for feature in &feed.data.features {
        buildings.push(evaluate_building(feature, now, weekday, caller)?);
    }

    if caller.is_some() {
        buildings.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }
    Ok(buildings)
}

fn evaluate_building(
    feature: &BuildingFeature,
    now: NaiveTime,
    weekday: &str,
    caller: Option<CallerLocation>,
) -> Result<BuildingResult, FeedError> {
    let coords = feature.geometry.coordinates;
    let distance = caller
        .map(|c| geo::haversine(c.lat, c.lng, coords[1], coords[0]))
        .unwrap_or(0.0);

    // No slot payload at all: unavailable with an empty room map. This is
    // a deterministic degradation, not an error.
    let Some(payload) = feature
        .properties
        .open_classroom_slots
        .as_deref()
        .filter(|s| !s.is_empty())
    else {
        return Ok(BuildingResult {
            name: feature.properties.building_name.clone(),
            building_code: feature.properties.building_code.clone(),
            building_status: BuildingStatus::Unavailable,
            rooms: BTreeMap::new(),
            coords,
            distance,
        });
    };

    let decoded =
        decode_room_slots(payload).map_err(|e| FeedError::Malformed(format!("{e:#}")))?;

    let mut rooms = BTreeMap::new();
    let mut room_flags = Vec::with_capacity(decoded.len());
    for room in decoded {
        let windows = schedule::select_today(&room.schedule, weekday);
        let (result, flags) = schedule::evaluate_room(windows, now);
        room_flags.push(flags);
        rooms.insert(room.room_number, result);
    }

    Ok(BuildingResult {
        name: feature.properties.building_name.clone(),
        building_code: feature.properties.building_code.clone(),
        building_status: rollup::aggregate_building(&room_flags),
        rooms,
        coords,
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotStatus;
    use serde_json::json;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn feed_with(features: Vec<serde_json::Value>) -> FeedDocument {
        serde_json::from_value(json!({"data": {"features": features}})).unwrap()
    }

    fn mc_building() -> serde_json::Value {
        let slots = json!({
            "data": [{
                "roomNumber": "1085",
                "Schedule": [{
                    "Weekday": "Monday",
                    "Slots": [{"StartTime": "09:00:00", "EndTime": "10:00:00"}]
                }]
            }]
        });
        json!({
            "properties": {
                "buildingName": "Mathematics & Computer Building",
                "buildingCode": "MC",
                "openClassroomSlots": slots.to_string()
            },
            "geometry": {"coordinates": [-80.5443, 43.4723]}
        })
    }

    #[test]
    fn test_in_window_building_is_available() {
        let feed = feed_with(vec![mc_building()]);
        let out = evaluate_campus(&feed, t(9, 45, 0), "Monday", None).unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].building_code, "MC");
        assert_eq!(out[0].building_status, BuildingStatus::Available);
        assert_eq!(out[0].distance, 0.0);

        let room = &out[0].rooms["1085"];
        assert_eq!(room.slots.len(), 1);
        assert_eq!(room.slots[0].status, SlotStatus::Available);
    }

    #[test]
    fn test_pre_window_building_is_upcoming() {
        let feed = feed_with(vec![mc_building()]);
        let out = evaluate_campus(&feed, t(8, 50, 0), "Monday", None).unwrap();

        assert_eq!(out[0].building_status, BuildingStatus::Upcoming);
        assert_eq!(out[0].rooms["1085"].slots[0].status, SlotStatus::Upcoming);
    }

    #[test]
    fn test_post_window_building_is_unavailable_with_empty_slots() {
        let feed = feed_with(vec![mc_building()]);
        let out = evaluate_campus(&feed, t(11, 0, 0), "Monday", None).unwrap();

        assert_eq!(out[0].building_status, BuildingStatus::Unavailable);
        assert!(out[0].rooms["1085"].slots.is_empty());
    }

    #[test]
    fn test_wrong_weekday_means_no_windows() {
        let feed = feed_with(vec![mc_building()]);
        let out = evaluate_campus(&feed, t(9, 45, 0), "Tuesday", None).unwrap();

        assert_eq!(out[0].building_status, BuildingStatus::Unavailable);
        // The room still appears, with no slots.
        assert!(out[0].rooms["1085"].slots.is_empty());
    }

    #[test]
    fn test_missing_slot_payload_degrades_to_unavailable() {
        let feed = feed_with(vec![json!({
            "properties": {"buildingName": "No Data Hall", "buildingCode": "ND"},
            "geometry": {"coordinates": [-80.54, 43.47]}
        })]);
        let out = evaluate_campus(&feed, t(9, 45, 0), "Monday", None).unwrap();

        assert_eq!(out[0].building_status, BuildingStatus::Unavailable);
        assert!(out[0].rooms.is_empty());
    }

    #[test]
    fn test_empty_slot_payload_degrades_like_missing() {
        let feed = feed_with(vec![json!({
            "properties": {
                "buildingName": "No Data Hall",
                "buildingCode": "ND",
                "openClassroomSlots": ""
            },
            "geometry": {"coordinates": [-80.54, 43.47]}
        })]);
        let out = evaluate_campus(&feed, t(9, 45, 0), "Monday", None).unwrap();
        assert_eq!(out[0].building_status, BuildingStatus::Unavailable);
        assert!(out[0].rooms.is_empty());
    }

    #[test]
    fn test_malformed_slot_payload_is_a_feed_error() {
        let feed = feed_with(vec![json!({
            "properties": {
                "buildingName": "Broken Hall",
                "buildingCode": "BH",
                "openClassroomSlots": "{not json"
            },
            "geometry": {"coordinates": [-80.54, 43.47]}
        })]);
        let err = evaluate_campus(&feed, t(9, 45, 0), "Monday", None).unwrap_err();
        assert!(matches!(err, FeedError::Malformed(_)));
    }

    #[test]
    fn test_caller_location_sorts_ascending_by_distance() {
        let near = json!({
            "properties": {"buildingName": "Near Hall", "buildingCode": "NH"},
            "geometry": {"coordinates": [-80.5449, 43.4723]}
        });
        let far = json!({
            "properties": {"buildingName": "Far Hall", "buildingCode": "FH"},
            "geometry": {"coordinates": [-79.3832, 43.6532]}
        });
        // Feed lists the far building first.
        let feed = feed_with(vec![far, near]);
        let caller = CallerLocation {
            lat: 43.4723,
            lng: -80.5449,
        };
        let out = evaluate_campus(&feed, t(9, 0, 0), "Monday", Some(caller)).unwrap();

        assert_eq!(out[0].building_code, "NH");
        assert_eq!(out[1].building_code, "FH");
        assert_eq!(out[0].distance, 0.0);
        assert!(out[1].distance > 90.0);
    }

    #[test]
    fn test_without_caller_location_feed_order_is_kept() {
        let a = json!({
            "properties": {"buildingName": "A", "buildingCode": "A"},
            "geometry": {"coordinates": [-79.3832, 43.6532]}
        });
        let b = json!({
            "properties": {"buildingName": "B", "buildingCode": "B"},
            "geometry": {"coordinates": [-80.5449, 43.4723]}
        });
        let feed = feed_with(vec![a, b]);
        let out = evaluate_campus(&feed, t(9, 0, 0), "Monday", None).unwrap();

        assert_eq!(out[0].building_code, "A");
        assert_eq!(out[1].building_code, "B");
        assert!(out.iter().all(|building| building.distance == 0.0));
    }

    #[test]
    fn test_multiple_rooms_roll_up_by_priority() {
        let slots = json!({
            "data": [
                {
                    "roomNumber": "101",
                    "Schedule": [{
                        "Weekday": "Monday",
                        "Slots": [{"StartTime": "15:00:00", "EndTime": "16:00:00"}]
                    }]
                },
                {
                    "roomNumber": "102",
                    "Schedule": [{
                        "Weekday": "Monday",
                        "Slots": [{"StartTime": "09:40:00", "EndTime": "10:30:00"}]
                    }]
                }
            ]
        });
        let feed = feed_with(vec![json!({
            "properties": {
                "buildingName": "Two Rooms",
                "buildingCode": "TR",
                "openClassroomSlots": slots.to_string()
            },
            "geometry": {"coordinates": [-80.54, 43.47]}
        })]);

        // 09:30: room 101 is far-future, room 102 starts in 10 minutes.
        let out = evaluate_campus(&feed, t(9, 30, 0), "Monday", None).unwrap();
        assert_eq!(out[0].building_status, BuildingStatus::Upcoming);

        // 09:45: room 102 is open.
        let out = evaluate_campus(&feed, t(9, 45, 0), "Monday", None).unwrap();
        assert_eq!(out[0].building_status, BuildingStatus::Available);
    }
}
