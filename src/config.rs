use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{Coordinate, RankingPolicy};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub explore: ExploreSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl ServerSettings {
    /// Worker threads for the HTTP server, never zero
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or(4).max(1)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_seed_path")]
    pub seed_path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { seed_path: default_seed_path() }
    }
}

fn default_seed_path() -> String { "data/locations.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_tie_threshold")]
    pub tie_threshold: f64,
    #[serde(default = "default_geofence_radius_m")]
    pub default_geofence_radius_m: f64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            tie_threshold: default_tie_threshold(),
            default_geofence_radius_m: default_geofence_radius_m(),
        }
    }
}

impl From<&RankingSettings> for RankingPolicy {
    fn from(settings: &RankingSettings) -> Self {
        RankingPolicy {
            tie_threshold: settings.tie_threshold,
            default_geofence_radius_m: settings.default_geofence_radius_m,
        }
    }
}

fn default_tie_threshold() -> f64 { 0.1 }
fn default_geofence_radius_m() -> f64 { 100.0 }

/// Subject position and cadence for the nearby watcher
#[derive(Debug, Clone, Deserialize)]
pub struct ExploreSettings {
    #[serde(default = "default_subject_latitude")]
    pub latitude: f64,
    #[serde(default = "default_subject_longitude")]
    pub longitude: f64,
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for ExploreSettings {
    fn default() -> Self {
        Self {
            latitude: default_subject_latitude(),
            longitude: default_subject_longitude(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl ExploreSettings {
    pub fn subject(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

// San Francisco city hall area
fn default_subject_latitude() -> f64 { 37.7749 }
fn default_subject_longitude() -> f64 { -122.4194 }
fn default_refresh_interval_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with VIBE_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., VIBE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("VIBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("VIBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn ranking_policy(&self) -> RankingPolicy {
        RankingPolicy::from(&self.ranking)
    }
}
