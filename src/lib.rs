//! Vibe Check - location discovery and vibe rating service
//!
//! This library provides the location query engine (text/category filtering
//! with rating-then-distance ranking) and the geofence proximity evaluator,
//! plus the in-memory catalog and HTTP routes built around them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{evaluate_proximity, query_locations, QueryEngine, CategoryFilter, distance::haversine_distance};
pub use crate::models::{Category, Coordinate, Location, Rating, RankingPolicy, VibeTag};
