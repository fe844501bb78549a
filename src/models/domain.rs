use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default geofence radius in meters when a location does not set one
pub const DEFAULT_GEOFENCE_RADIUS_M: f64 = 100.0;

/// Kind of place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurant,
    Gym,
    Park,
    Library,
    Cafe,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Restaurant,
        Category::Gym,
        Category::Park,
        Category::Library,
        Category::Cafe,
        Category::Other,
    ];

    /// Lowercase label, also the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Gym => "gym",
            Category::Park => "park",
            Category::Library => "library",
            Category::Cafe => "cafe",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a category label is not one of the known categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A place people can rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "averageRating", default)]
    pub average_rating: f64,
    #[serde(rename = "totalRatings", default)]
    pub total_ratings: u32,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Miles from an assumed subject, only used to break rating ties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinate>,
    #[serde(rename = "geofenceRadius", default, skip_serializing_if = "Option::is_none")]
    pub geofence_radius: Option<f64>,
}

impl Location {
    /// Geofence radius in meters, falling back to the default
    pub fn geofence_radius_or(&self, default_m: f64) -> f64 {
        self.geofence_radius.unwrap_or(default_m)
    }

    /// Distance used for tie-breaking; missing counts as zero
    pub fn sort_distance(&self) -> f64 {
        self.distance.unwrap_or(0.0)
    }
}

/// Atmosphere tags a reviewer can attach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VibeTag {
    Quiet,
    Lively,
    Cozy,
    Spacious,
    Friendly,
    Professional,
    Trendy,
    Relaxing,
    Energetic,
    Romantic,
    FamilyFriendly,
    Clean,
}

/// A single review of a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: String,
    #[serde(rename = "locationId")]
    pub location_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Overall stars, 1-5
    pub rating: u8,
    /// Vibe stars, 1-5
    #[serde(rename = "vibeRating")]
    pub vibe_rating: u8,
    pub comment: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub tags: Vec<VibeTag>,
}

/// Colour band of a location's average rating on the explore map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VibeTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Tunables for ranking and geofencing
#[derive(Debug, Clone, Copy)]
pub struct RankingPolicy {
    /// Ratings closer than this are treated as tied
    pub tie_threshold: f64,
    pub default_geofence_radius_m: f64,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            tie_threshold: 0.1,
            default_geofence_radius_m: DEFAULT_GEOFENCE_RADIUS_M,
        }
    }
}
