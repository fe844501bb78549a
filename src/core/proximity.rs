use std::collections::BTreeSet;
use crate::core::distance::distance_between;
use crate::models::{Coordinate, Location};

/// Distance from `subject` if the location sits inside its geofence
///
/// Locations without coordinates are never inside. The boundary is
/// exclusive: a distance equal to the radius is outside.
#[inline]
pub fn distance_if_nearby(subject: &Coordinate, location: &Location, default_radius_m: f64) -> Option<f64> {
    let coordinates = location.coordinates.as_ref()?;
    let distance = distance_between(subject, coordinates);

    if distance < location.geofence_radius_or(default_radius_m) {
        Some(distance)
    } else {
        None
    }
}

/// Ids of every location whose geofence contains `subject`
pub fn nearby_ids(subject: &Coordinate, locations: &[Location], default_radius_m: f64) -> BTreeSet<String> {
    locations
        .iter()
        .filter(|location| distance_if_nearby(subject, location, default_radius_m).is_some())
        .map(|location| location.id.clone())
        .collect()
}

/// Nearby locations paired with their distance in meters, closest first
pub fn nearby_with_distances<'a>(
    subject: &Coordinate,
    locations: &'a [Location],
    default_radius_m: f64,
) -> Vec<(&'a Location, f64)> {
    let mut nearby: Vec<(&Location, f64)> = locations
        .iter()
        .filter_map(|location| {
            distance_if_nearby(subject, location, default_radius_m).map(|d| (location, d))
        })
        .collect();

    // Distances that made it this far are finite
    nearby.sort_by(|a, b| a.1.total_cmp(&b.1));
    nearby
}
