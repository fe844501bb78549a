use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{Category, Coordinate, VibeTag};

/// Request to query the location list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryLocationsRequest {
    #[serde(default)]
    pub query: String,
    /// Raw category label; unknown labels yield an empty result
    #[serde(default)]
    pub category: Option<String>,
}

/// Request to evaluate which locations are nearby
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NearbyRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<NearbyRequest> for Coordinate {
    fn from(req: NearbyRequest) -> Self {
        Coordinate::new(req.latitude, req.longitude)
    }
}

/// Request to add a new place
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddLocationRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub coordinates: Option<Coordinate>,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(rename = "geofenceRadius", default)]
    pub geofence_radius: Option<f64>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Request to submit a review for a location
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitReviewRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "userName")]
    pub user_name: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[validate(range(min = 1, max = 5))]
    #[serde(rename = "vibeRating")]
    pub vibe_rating: u8,
    #[validate(custom(function = "not_blank"))]
    pub comment: String,
    #[serde(default)]
    pub tags: Vec<VibeTag>,
}

/// Request to compare two sets of vibe preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VibeMatchRequest {
    #[serde(rename = "userPreferences", default)]
    pub user_preferences: Vec<VibeTag>,
    #[serde(rename = "friendPreferences", default)]
    pub friend_preferences: Vec<VibeTag>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
