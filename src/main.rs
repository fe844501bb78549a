use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use std::time::Duration;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;
use vibe_check::config::Settings;
use vibe_check::core::QueryEngine;
use vibe_check::routes::{self, AppState};
use vibe_check::services::{LocationCatalog, NearbyWatcher};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    // Initialize logging; LOG_LEVEL / LOG_FORMAT override the [logging] section
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Vibe Check service...");
    info!("Configuration loaded successfully");

    // Seed the in-memory catalog
    let catalog = LocationCatalog::load_from(&settings.catalog.seed_path).map_err(|e| {
        error!("Failed to load catalog from {}: {}", settings.catalog.seed_path, e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    let engine = QueryEngine::new(settings.ranking_policy());
    info!("Query engine initialized with policy: {:?}", engine.policy());

    // Periodic nearby re-evaluation for the configured subject
    let watcher = NearbyWatcher::new(
        catalog.clone(),
        engine,
        settings.explore.subject(),
        Duration::from_secs(settings.explore.refresh_interval_secs.max(1)),
    );
    let _watch_handle = watcher.spawn();

    info!(
        "Nearby watcher started for {:?} every {}s",
        watcher.subject(),
        settings.explore.refresh_interval_secs.max(1)
    );

    // Build application state
    let app_state = AppState {
        catalog,
        engine,
        watcher,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.worker_count();

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
