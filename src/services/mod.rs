// Service exports
pub mod catalog;
pub mod watcher;

pub use catalog::{CatalogError, CatalogSeed, LocationCatalog};
pub use watcher::{NearbySnapshot, NearbyWatcher};
