use crate::models::Coordinate;

/// Earth's radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the Haversine distance between two points in meters
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in meters. Out-of-range inputs are not rejected; they go through
/// the formula as-is.
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Haversine distance between two coordinates in meters
#[inline]
pub fn distance_between(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance(from.latitude, from.longitude, to.latitude, to.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::{point, HaversineDistance};

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london_lat = 51.5074;
        let london_lon = -0.1278;
        let paris_lat = 48.8566;
        let paris_lon = 2.3522;

        let distance = haversine_distance(london_lat, london_lon, paris_lat, paris_lon);
        assert!((distance - 344_000.0).abs() < 10_000.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_zero_distance() {
        let here = Coordinate::new(37.7749, -122.4194);
        assert_eq!(distance_between(&here, &here), 0.0);
    }

    #[test]
    fn test_pure_latitude_offset_is_arc_length() {
        // Along a meridian the great-circle distance is R * delta_phi
        let delta_deg = 0.01;
        let distance = haversine_distance(10.0, 20.0, 10.0 + delta_deg, 20.0);
        assert_relative_eq!(distance, EARTH_RADIUS_M * delta_deg.to_radians(), max_relative = 1e-9);
    }

    #[test]
    fn test_agrees_with_geo_crate() {
        // geo uses a mean radius of 6371008.8 m, so allow a small relative gap
        let ferry_building = point!(x: -122.3937, y: 37.7955);
        let coit_tower = point!(x: -122.4058, y: 37.8024);
        let expected = ferry_building.haversine_distance(&coit_tower);

        let distance = haversine_distance(37.7955, -122.3937, 37.8024, -122.4058);
        assert_relative_eq!(distance, expected, max_relative = 1e-5);
    }

    #[test]
    fn test_out_of_range_input_still_yields_a_number() {
        let distance = haversine_distance(120.0, 400.0, -95.0, -200.0);
        assert!(distance.is_finite());
    }
}
