use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{vibe_match, vibe_tier, CategoryFilter, QueryEngine};
use crate::models::{
    AddLocationRequest, Coordinate, ErrorResponse, HealthResponse, NearbyLocation, NearbyRequest, NearbyResponse,
    QueryLocationsRequest, QueryLocationsResponse, RatingsResponse, SubmitReviewRequest,
    SubmitReviewResponse, VibeMatchRequest, VibeMatchResponse, WatchResponse,
};
use crate::services::{CatalogError, LocationCatalog, NearbyWatcher};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: LocationCatalog,
    pub engine: QueryEngine,
    pub watcher: NearbyWatcher,
}

/// Configure all location-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/locations/query", web::post().to(query_locations))
        .route("/locations", web::post().to(add_location))
        .route("/locations/{id}", web::get().to(get_location))
        .route("/locations/{id}/ratings", web::get().to(get_ratings))
        .route("/locations/{id}/reviews", web::post().to(submit_review))
        .route("/explore/nearby", web::post().to(nearby))
        .route("/explore/watch", web::get().to(watch))
        .route("/vibes/match", web::post().to(match_vibes));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::warn!("Validation failed: {}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn catalog_error(err: CatalogError) -> HttpResponse {
    match err {
        CatalogError::NotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Location not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        other => {
            tracing::error!("Catalog operation failed: {}", other);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Catalog error".to_string(),
                message: other.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let locations = state.catalog.len().await;
    let status = if locations > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        locations,
    })
}

/// Query locations endpoint
///
/// POST /api/v1/locations/query
///
/// Request body:
/// ```json
/// {
///   "query": "coffee",
///   "category": "cafe"
/// }
/// ```
async fn query_locations(
    state: web::Data<AppState>,
    req: web::Json<QueryLocationsRequest>,
) -> impl Responder {
    let filter = CategoryFilter::parse(req.category.as_deref());
    if filter == CategoryFilter::Unrecognized {
        tracing::debug!("Unrecognized category {:?}, result will be empty", req.category);
    }

    let locations = state.catalog.snapshot().await;
    let ranked = state.engine.query(&locations, &req.query, filter);

    tracing::info!(
        "Query {:?} (category {:?}) matched {} of {} locations",
        req.query,
        req.category,
        ranked.len(),
        locations.len()
    );

    HttpResponse::Ok().json(QueryLocationsResponse {
        total_results: ranked.len(),
        locations: ranked,
    })
}

/// Add location endpoint
///
/// POST /api/v1/locations
async fn add_location(
    state: web::Data<AppState>,
    req: web::Json<AddLocationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let location = state.catalog.add_location(req.into_inner()).await;
    tracing::info!("Added location {} ({})", location.id, location.name);

    HttpResponse::Created().json(location)
}

/// Location detail endpoint
///
/// GET /api/v1/locations/{id}
async fn get_location(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match state.catalog.get(&path).await {
        Ok(location) => HttpResponse::Ok().json(location),
        Err(e) => catalog_error(e),
    }
}

/// Ratings for a location
///
/// GET /api/v1/locations/{id}/ratings
async fn get_ratings(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let location_id = path.into_inner();
    match state.catalog.ratings_for(&location_id).await {
        Ok(ratings) => HttpResponse::Ok().json(RatingsResponse { location_id, ratings }),
        Err(e) => catalog_error(e),
    }
}

/// Submit review endpoint
///
/// POST /api/v1/locations/{id}/reviews
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "userName": "string",
///   "rating": 5,
///   "vibeRating": 4,
///   "comment": "string",
///   "tags": ["cozy", "quiet"]
/// }
/// ```
async fn submit_review(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SubmitReviewRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.catalog.submit_review(&path, req.into_inner()).await {
        Ok((rating, location)) => {
            tracing::info!(
                "Review {} recorded for {}: average now {:.2} over {} ratings",
                rating.id,
                location.id,
                location.average_rating,
                location.total_ratings
            );
            HttpResponse::Created().json(SubmitReviewResponse {
                rating,
                average_rating: location.average_rating,
                total_ratings: location.total_ratings,
            })
        }
        Err(e) => catalog_error(e),
    }
}

/// Nearby locations for an arbitrary subject
///
/// POST /api/v1/explore/nearby
async fn nearby(
    state: web::Data<AppState>,
    req: web::Json<NearbyRequest>,
) -> impl Responder {
    let subject: Coordinate = req.into_inner().into();
    let locations = state.catalog.snapshot().await;

    let nearby: Vec<NearbyLocation> = state
        .engine
        .nearby_with_distances(&subject, &locations)
        .into_iter()
        .map(|(location, distance_meters)| NearbyLocation {
            id: location.id.clone(),
            name: location.name.clone(),
            distance_meters,
            vibe_tier: vibe_tier(location.average_rating),
        })
        .collect();

    tracing::debug!("{} locations nearby {:?}", nearby.len(), subject);

    HttpResponse::Ok().json(NearbyResponse {
        count: nearby.len(),
        nearby,
    })
}

/// Latest result from the background nearby watcher
///
/// GET /api/v1/explore/watch
async fn watch(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.watcher.latest().await;

    HttpResponse::Ok().json(WatchResponse {
        location_ids: snapshot.location_ids.into_iter().collect(),
        evaluated_at: snapshot.evaluated_at,
    })
}

/// Vibe preference overlap between two people
///
/// POST /api/v1/vibes/match
async fn match_vibes(req: web::Json<VibeMatchRequest>) -> impl Responder {
    HttpResponse::Ok().json(VibeMatchResponse {
        match_percent: vibe_match(&req.user_preferences, &req.friend_preferences),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = catalog_error(CatalogError::NotFound("x".to_string()));
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
