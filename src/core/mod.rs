// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod proximity;
pub mod query;
pub mod ranking;
pub mod vibe;

pub use distance::{haversine_distance, distance_between, EARTH_RADIUS_M};
pub use filters::{CategoryFilter, TextQuery};
pub use proximity::{distance_if_nearby, nearby_ids, nearby_with_distances};
pub use query::{evaluate_proximity, query_locations, QueryEngine};
pub use ranking::{compare_by_rank, rank_locations};
pub use vibe::{vibe_match, vibe_tier};
