use crate::models::{AddLocationRequest, Location, Rating, SubmitReviewRequest};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur with catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Location not found: {0}")]
    NotFound(String),

    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}

/// Seed file layout
#[derive(Debug, Default, serde::Deserialize)]
pub struct CatalogSeed {
    pub locations: Vec<Location>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

impl CatalogSeed {
    /// Check the location invariants serde cannot express
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();

        for location in &self.locations {
            if !ids.insert(location.id.as_str()) {
                return Err(CatalogError::InvalidSeed(format!("duplicate location id {}", location.id)));
            }
            if !(0.0..=5.0).contains(&location.average_rating) {
                return Err(CatalogError::InvalidSeed(format!(
                    "location {} has averageRating {} outside [0, 5]",
                    location.id, location.average_rating
                )));
            }
            if let Some(radius) = location.geofence_radius {
                if radius.is_nan() || radius <= 0.0 {
                    return Err(CatalogError::InvalidSeed(format!(
                        "location {} has non-positive geofenceRadius {}",
                        location.id, radius
                    )));
                }
            }
        }

        if let Some(orphan) = self.ratings.iter().find(|r| !ids.contains(r.location_id.as_str())) {
            return Err(CatalogError::InvalidSeed(format!(
                "rating {} references unknown location {}",
                orphan.id, orphan.location_id
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
struct CatalogState {
    locations: Vec<Location>,
    ratings: HashMap<String, Vec<Rating>>,
}

/// In-memory location and review store
///
/// Cloning is cheap and shares the same underlying data. Read paths hand out
/// snapshots so the query core never runs under the lock.
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    state: Arc<RwLock<CatalogState>>,
}

impl LocationCatalog {
    pub fn new(locations: Vec<Location>) -> Self {
        Self::from_seed(CatalogSeed { locations, ratings: vec![] })
    }

    pub fn from_seed(seed: CatalogSeed) -> Self {
        let mut ratings: HashMap<String, Vec<Rating>> = HashMap::new();
        for rating in seed.ratings {
            ratings.entry(rating.location_id.clone()).or_default().push(rating);
        }

        Self {
            state: Arc::new(RwLock::new(CatalogState {
                locations: seed.locations,
                ratings,
            })),
        }
    }

    /// Load a catalog from a JSON seed file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let seed: CatalogSeed = serde_json::from_str(&data)?;
        seed.validate()?;

        tracing::info!(
            "Loaded {} locations and {} ratings from {}",
            seed.locations.len(),
            seed.ratings.len(),
            path.as_ref().display()
        );

        Ok(Self::from_seed(seed))
    }

    /// Copy of every location, in insertion order
    pub async fn snapshot(&self) -> Vec<Location> {
        self.state.read().await.locations.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.locations.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn get(&self, id: &str) -> Result<Location, CatalogError> {
        self.state
            .read()
            .await
            .locations
            .iter()
            .find(|location| location.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Reviews for a location, oldest first
    pub async fn ratings_for(&self, id: &str) -> Result<Vec<Rating>, CatalogError> {
        let state = self.state.read().await;
        if !state.locations.iter().any(|location| location.id == id) {
            return Err(CatalogError::NotFound(id.to_string()));
        }

        Ok(state.ratings.get(id).cloned().unwrap_or_default())
    }

    /// Add a new place with no ratings yet
    pub async fn add_location(&self, req: AddLocationRequest) -> Location {
        let location = Location {
            id: uuid::Uuid::new_v4().to_string(),
            name: req.name.trim().to_string(),
            category: req.category,
            address: req.address.trim().to_string(),
            description: req.description.trim().to_string(),
            average_rating: 0.0,
            total_ratings: 0,
            image_url: req.image_url,
            distance: None,
            coordinates: req.coordinates,
            geofence_radius: req.geofence_radius,
        };

        self.state.write().await.locations.push(location.clone());
        tracing::debug!("Added location {} ({})", location.id, location.name);

        location
    }

    /// Record a review and fold it into the location's running average
    ///
    /// Returns the stored rating and the updated location.
    pub async fn submit_review(
        &self,
        location_id: &str,
        req: SubmitReviewRequest,
    ) -> Result<(Rating, Location), CatalogError> {
        let mut state = self.state.write().await;

        let location = state
            .locations
            .iter_mut()
            .find(|location| location.id == location_id)
            .ok_or_else(|| CatalogError::NotFound(location_id.to_string()))?;

        let total = location.total_ratings as f64;
        let average = (location.average_rating * total + req.rating as f64) / (total + 1.0);
        location.average_rating = average.clamp(0.0, 5.0);
        location.total_ratings = location.total_ratings.saturating_add(1);
        let updated = location.clone();

        let rating = Rating {
            id: uuid::Uuid::new_v4().to_string(),
            location_id: location_id.to_string(),
            user_id: req.user_id,
            user_name: req.user_name,
            rating: req.rating,
            vibe_rating: req.vibe_rating,
            comment: req.comment.trim().to_string(),
            created_at: chrono::Utc::now(),
            tags: req.tags,
        };

        state
            .ratings
            .entry(location_id.to_string())
            .or_default()
            .push(rating.clone());

        Ok((rating, updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, VibeTag};
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    fn create_location(id: &str, rating: f64, total: u32) -> Location {
        Location {
            id: id.to_string(),
            name: format!("Place {}", id),
            category: Category::Cafe,
            address: "1 Main St".to_string(),
            description: String::new(),
            average_rating: rating,
            total_ratings: total,
            image_url: None,
            distance: None,
            coordinates: None,
            geofence_radius: None,
        }
    }

    fn review(rating: u8) -> SubmitReviewRequest {
        SubmitReviewRequest {
            user_id: "u1".to_string(),
            user_name: "Sam".to_string(),
            rating,
            vibe_rating: 4,
            comment: "  Nice and calm  ".to_string(),
            tags: vec![VibeTag::Quiet],
        }
    }

    #[tokio::test]
    async fn test_submit_review_updates_running_average() {
        let catalog = LocationCatalog::new(vec![create_location("1", 4.0, 3)]);

        let (rating, updated) = catalog.submit_review("1", review(5)).await.unwrap();

        assert_eq!(rating.comment, "Nice and calm");
        assert_eq!(updated.total_ratings, 4);
        assert_relative_eq!(updated.average_rating, 4.25);
        assert_eq!(catalog.ratings_for("1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_first_review_sets_average() {
        let catalog = LocationCatalog::new(vec![create_location("1", 0.0, 0)]);

        let (_, updated) = catalog.submit_review("1", review(3)).await.unwrap();

        assert_eq!(updated.total_ratings, 1);
        assert_relative_eq!(updated.average_rating, 3.0);
    }

    #[tokio::test]
    async fn test_review_unknown_location() {
        let catalog = LocationCatalog::new(vec![]);

        let result = catalog.submit_review("missing", review(4)).await;
        assert!(matches!(result, Err(CatalogError::NotFound(id)) if id == "missing"));
        assert!(matches!(catalog.ratings_for("missing").await, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_location_starts_unrated() {
        let catalog = LocationCatalog::new(vec![]);

        let location = catalog
            .add_location(AddLocationRequest {
                name: " Mission Cliffs ".to_string(),
                address: "2295 Harrison St".to_string(),
                description: String::new(),
                category: Category::Gym,
                coordinates: None,
                geofence_radius: None,
                image_url: None,
            })
            .await;

        assert_eq!(location.name, "Mission Cliffs");
        assert_eq!(location.total_ratings, 0);
        assert_eq!(location.average_rating, 0.0);
        assert_eq!(catalog.get(&location.id).await.unwrap(), location);
        assert!(catalog.ratings_for(&location.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_from_seed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locations.json");
        std::fs::write(
            &path,
            r#"{
                "locations": [
                    { "id": "a", "name": "A", "category": "park", "address": "x",
                      "averageRating": 4.1, "totalRatings": 2 }
                ],
                "ratings": [
                    { "id": "r1", "locationId": "a", "userId": "u", "userName": "U",
                      "rating": 4, "vibeRating": 5, "comment": "ok",
                      "createdAt": "2024-01-15T10:30:00Z", "tags": ["cozy"] }
                ]
            }"#,
        )
        .unwrap();

        let catalog = LocationCatalog::load_from(&path).unwrap();

        assert_eq!(catalog.len().await, 1);
        assert_eq!(catalog.ratings_for("a").await.unwrap()[0].tags, vec![VibeTag::Cozy]);
    }

    #[test]
    fn test_load_from_bad_seed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locations.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(LocationCatalog::load_from(&path), Err(CatalogError::Json(_))));
        assert!(matches!(
            LocationCatalog::load_from(dir.path().join("absent.json")),
            Err(CatalogError::Io(_))
        ));
    }

    fn write_seed(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("locations.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_from_rejects_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        let path = write_seed(
            &dir,
            r#"{ "locations": [
                { "id": "a", "name": "A", "category": "park", "address": "x", "averageRating": 4.0, "totalRatings": 1 },
                { "id": "a", "name": "B", "category": "gym", "address": "y", "averageRating": 3.0, "totalRatings": 1 }
            ] }"#,
        );

        assert!(matches!(
            LocationCatalog::load_from(&path),
            Err(CatalogError::InvalidSeed(msg)) if msg.contains("duplicate")
        ));
    }

    #[test]
    fn test_load_from_rejects_rating_out_of_range() {
        let dir = TempDir::new().unwrap();
        let path = write_seed(
            &dir,
            r#"{ "locations": [
                { "id": "a", "name": "A", "category": "park", "address": "x", "averageRating": 9.5, "totalRatings": 1 }
            ] }"#,
        );

        assert!(matches!(LocationCatalog::load_from(&path), Err(CatalogError::InvalidSeed(_))));
    }

    #[test]
    fn test_load_from_rejects_non_positive_radius() {
        let dir = TempDir::new().unwrap();
        let path = write_seed(
            &dir,
            r#"{ "locations": [
                { "id": "a", "name": "A", "category": "park", "address": "x", "averageRating": 4.0,
                  "totalRatings": 1, "geofenceRadius": -5 }
            ] }"#,
        );

        assert!(matches!(
            LocationCatalog::load_from(&path),
            Err(CatalogError::InvalidSeed(msg)) if msg.contains("geofenceRadius")
        ));
    }

    #[test]
    fn test_load_from_rejects_orphan_rating() {
        let dir = TempDir::new().unwrap();
        let path = write_seed(
            &dir,
            r#"{
                "locations": [
                    { "id": "a", "name": "A", "category": "park", "address": "x", "averageRating": 4.0, "totalRatings": 1 }
                ],
                "ratings": [
                    { "id": "r1", "locationId": "zzz", "userId": "u", "userName": "U",
                      "rating": 4, "vibeRating": 5, "comment": "ok",
                      "createdAt": "2024-01-15T10:30:00Z" }
                ]
            }"#,
        );

        assert!(matches!(
            LocationCatalog::load_from(&path),
            Err(CatalogError::InvalidSeed(msg)) if msg.contains("zzz")
        ));
    }

    #[tokio::test]
    async fn test_review_count_saturates() {
        let catalog = LocationCatalog::new(vec![create_location("1", 4.0, u32::MAX)]);

        let (_, updated) = catalog.submit_review("1", review(4)).await.unwrap();

        assert_eq!(updated.total_ratings, u32::MAX);
        assert_relative_eq!(updated.average_rating, 4.0);
    }
}
