//! Great-circle distance used for ranking buildings by proximity.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two lat/lng points, in kilometres.
///
/// Pure and total: symmetric, zero for coincident points, no input
/// validation (the orchestrator boundary validates coordinates).
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_for_coincident_points() {
        assert_eq!(haversine(43.4723, -80.5449, 43.4723, -80.5449), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let there = haversine(43.4723, -80.5449, 43.6532, -79.3832);
        let back = haversine(43.6532, -79.3832, 43.4723, -80.5449);
        assert!((there - back).abs() < 1e-12);
    }

    #[test]
    fn test_known_distance_waterloo_to_toronto() {
        // Campus to downtown Toronto is roughly 94 km as the crow flies.
        let km = haversine(43.4723, -80.5449, 43.6532, -79.3832);
        assert!((90.0..100.0).contains(&km), "got {km} km");
    }

    #[test]
    fn test_short_distance_across_campus() {
        // Two buildings a few hundred metres apart.
        let km = haversine(43.4723, -80.5449, 43.4689, -80.5400);
        assert!(km > 0.0 && km < 1.0, "got {km} km");
    }
}
