// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Category, Coordinate, Location, Rating, RankingPolicy, UnknownCategory, VibeTag, VibeTier, DEFAULT_GEOFENCE_RADIUS_M};
pub use requests::{AddLocationRequest, NearbyRequest, QueryLocationsRequest, SubmitReviewRequest, VibeMatchRequest};
pub use responses::{ErrorResponse, HealthResponse, NearbyLocation, NearbyResponse, QueryLocationsResponse, RatingsResponse, SubmitReviewResponse, VibeMatchResponse, WatchResponse};
