use std::cmp::Ordering;
use crate::models::Location;

/// Compare two locations for display order
///
/// Higher `average_rating` first. Ratings within `tie_threshold` of each
/// other are tied and fall back to `distance` ascending, missing distance
/// counting as zero.
///
/// This relation is not transitive (4.0 ~ 4.08 ~ 4.16 but 4.0 < 4.16), so it
/// must not be handed to `slice::sort_by`.
#[inline]
pub fn compare_by_rank(a: &Location, b: &Location, tie_threshold: f64) -> Ordering {
    let rating_diff = b.average_rating - a.average_rating;
    if rating_diff.abs() > tie_threshold {
        return if rating_diff > 0.0 { Ordering::Greater } else { Ordering::Less };
    }

    a.sort_distance()
        .partial_cmp(&b.sort_distance())
        .unwrap_or(Ordering::Equal)
}

/// Stable insertion sort by [`compare_by_rank`]
///
/// Each element moves left only past neighbours that rank strictly after
/// it, so equal keys keep their input order and the result is the same for
/// every call with the same input.
pub fn rank_locations(locations: &mut [Location], tie_threshold: f64) {
    for i in 1..locations.len() {
        let mut j = i;
        while j > 0
            && compare_by_rank(&locations[j - 1], &locations[j], tie_threshold) == Ordering::Greater
        {
            locations.swap(j - 1, j);
            j -= 1;
        }
    }
}
