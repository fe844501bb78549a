use crate::core::QueryEngine;
use crate::models::Coordinate;
use crate::services::LocationCatalog;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Most recent proximity evaluation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearbySnapshot {
    pub location_ids: BTreeSet<String>,
    pub evaluated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Re-evaluates which locations are nearby on a fixed cadence
///
/// The proximity core stays pure; this is the scheduler around it.
#[derive(Clone)]
pub struct NearbyWatcher {
    catalog: LocationCatalog,
    engine: QueryEngine,
    subject: Coordinate,
    interval: Duration,
    latest: Arc<RwLock<NearbySnapshot>>,
}

impl NearbyWatcher {
    pub fn new(
        catalog: LocationCatalog,
        engine: QueryEngine,
        subject: Coordinate,
        interval: Duration,
    ) -> Self {
        Self {
            catalog,
            engine,
            subject,
            interval,
            latest: Arc::new(RwLock::new(NearbySnapshot::default())),
        }
    }

    pub fn subject(&self) -> Coordinate {
        self.subject
    }

    pub async fn latest(&self) -> NearbySnapshot {
        self.latest.read().await.clone()
    }

    /// Run one evaluation and publish it
    ///
    /// Returns true when the nearby set differs from the previous one.
    pub async fn tick(&self) -> bool {
        let locations = self.catalog.snapshot().await;
        let nearby = self.engine.nearby(&self.subject, &locations);

        let mut latest = self.latest.write().await;
        let changed = latest.location_ids != nearby;

        if changed {
            let entered: Vec<_> = nearby.difference(&latest.location_ids).collect();
            let left: Vec<_> = latest.location_ids.difference(&nearby).collect();
            tracing::info!("Nearby set changed: entered={:?}, left={:?}", entered, left);
        } else {
            tracing::trace!("Nearby set unchanged ({} locations)", nearby.len());
        }

        latest.location_ids = nearby;
        latest.evaluated_at = Some(chrono::Utc::now());

        changed
    }

    /// Spawn the periodic loop on the current tokio runtime
    pub fn spawn(&self) -> JoinHandle<()> {
        let watcher = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(watcher.interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                watcher.tick().await;
            }
        })
    }
}
