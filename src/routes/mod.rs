// Route exports
pub mod locations;

use actix_web::{error, web, HttpRequest, HttpResponse};
use crate::models::ErrorResponse;

pub use locations::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(locations::configure),
    );
}

/// JSON extractor config that answers malformed bodies with an `ErrorResponse`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    });

    error::InternalError::from_response(err, response).into()
}
