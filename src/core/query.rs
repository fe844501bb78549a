use std::collections::BTreeSet;
use crate::models::{Category, Coordinate, Location, RankingPolicy};
use crate::core::{
    filters::{CategoryFilter, TextQuery},
    proximity::{nearby_ids, nearby_with_distances},
    ranking::rank_locations,
};

/// Filter and rank a location list by free text and category
///
/// Uses the default [`RankingPolicy`]. `None` means no category filter.
pub fn query_locations(
    locations: &[Location],
    query: &str,
    category: Option<Category>,
) -> Vec<Location> {
    QueryEngine::default().query(locations, query, CategoryFilter::from(category))
}

/// Ids of the locations whose geofence contains `subject`
///
/// Uses the default [`RankingPolicy`], so locations without a radius get
/// 100 meters.
pub fn evaluate_proximity(subject: &Coordinate, locations: &[Location]) -> BTreeSet<String> {
    QueryEngine::default().nearby(subject, locations)
}

/// Query orchestrator
///
/// # Pipeline Stages
/// 1. Text filter over name, address, description and category label
/// 2. Category filter
/// 3. Ranking by rating, then distance for close ratings
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine {
    policy: RankingPolicy,
}

impl QueryEngine {
    pub fn new(policy: RankingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Run the filter/rank pipeline over a snapshot of locations
    ///
    /// # Arguments
    /// * `locations` - The full location collection, in any order
    /// * `query` - Free text, may be empty
    /// * `category` - Category restriction; `Unrecognized` matches nothing
    ///
    /// # Returns
    /// The matching locations, ranked
    pub fn query(
        &self,
        locations: &[Location],
        query: &str,
        category: CategoryFilter,
    ) -> Vec<Location> {
        let text = TextQuery::new(query);

        let mut matched: Vec<Location> = locations
            .iter()
            // Stage 1: text filter
            .filter(|location| text.matches(location))
            // Stage 2: category filter
            .filter(|location| category.matches(location))
            .cloned()
            .collect();

        // Stage 3: rank
        rank_locations(&mut matched, self.policy.tie_threshold);

        matched
    }

    /// Ids of nearby locations under this engine's default radius
    pub fn nearby(&self, subject: &Coordinate, locations: &[Location]) -> BTreeSet<String> {
        nearby_ids(subject, locations, self.policy.default_geofence_radius_m)
    }

    /// Nearby locations with their distance in meters, closest first
    pub fn nearby_with_distances<'a>(
        &self,
        subject: &Coordinate,
        locations: &'a [Location],
    ) -> Vec<(&'a Location, f64)> {
        nearby_with_distances(subject, locations, self.policy.default_geofence_radius_m)
    }
}
