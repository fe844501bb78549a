use serde::{Deserialize, Serialize};
use crate::models::domain::{Location, Rating, VibeTier};

/// Response for the location query endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLocationsResponse {
    pub locations: Vec<Location>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// One nearby location with its distance from the subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyLocation {
    pub id: String,
    pub name: String,
    #[serde(rename = "distanceMeters")]
    pub distance_meters: f64,
    #[serde(rename = "vibeTier")]
    pub vibe_tier: VibeTier,
}

/// Response for the nearby endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyResponse {
    pub nearby: Vec<NearbyLocation>,
    pub count: usize,
}

/// Latest result published by the nearby watcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchResponse {
    #[serde(rename = "locationIds")]
    pub location_ids: Vec<String>,
    #[serde(rename = "evaluatedAt")]
    pub evaluated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Ratings for one location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingsResponse {
    #[serde(rename = "locationId")]
    pub location_id: String,
    pub ratings: Vec<Rating>,
}

/// Review submission result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReviewResponse {
    pub rating: Rating,
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    #[serde(rename = "totalRatings")]
    pub total_ratings: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VibeMatchResponse {
    #[serde(rename = "matchPercent")]
    pub match_percent: u8,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub locations: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
