//! Station store for buoy observation records
//!
//! The rule evaluator only depends on the `StationStore` trait: point lookup by
//! station id and a radius query with a field predicate. `MemoryStationStore`
//! is the in-process implementation, holding the latest station snapshot
//! loaded from a JSON document file.

use crate::app::models::{Coordinate, StationRecord};
use crate::error::Result;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod loader;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

pub use crate::app::services::geo_filter::StationPredicate;
pub use metadata::{LoadStats, StoreMetadata};

/// Source of station records for rule evaluation
///
/// Implementations own any indexing and connection handling. Failures to
/// reach the underlying data surface as `BuoyError::StoreUnavailable`.
pub trait StationStore {
    /// Look up one station by id
    ///
    /// Returns `BuoyError::StationNotFound` if no station has this id.
    fn find_by_id(&self, station_id: &str) -> impl Future<Output = Result<StationRecord>> + Send;

    /// Stations within `max_distance_miles` of `center` that satisfy
    /// `predicate`, each annotated with its distance
    ///
    /// Results come back in store iteration order. An empty result is not an
    /// error.
    fn query_within_radius(
        &self,
        center: Coordinate,
        max_distance_miles: f64,
        predicate: StationPredicate,
    ) -> impl Future<Output = Result<Vec<StationRecord>>> + Send;
}

/// In-memory station store
///
/// Records keep their insertion order, which is the iteration order seen by
/// radius queries. Clones share the same underlying records.
#[derive(Debug, Clone)]
pub struct MemoryStationStore {
    /// Station records in store iteration order
    pub(crate) stations: Arc<RwLock<Vec<StationRecord>>>,

    /// File the snapshot was loaded from, if any
    pub(crate) source_path: Option<PathBuf>,
}

impl Default for MemoryStationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStationStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            stations: Arc::new(RwLock::new(Vec::new())),
            source_path: None,
        }
    }

    /// Create a store holding `stations` in the given order
    pub fn from_records(stations: Vec<StationRecord>) -> Self {
        Self {
            stations: Arc::new(RwLock::new(stations)),
            ..Self::new()
        }
    }

    /// Get the total number of stations in the store
    pub async fn station_count(&self) -> usize {
        self.stations.read().await.len()
    }

    /// Copy of every record in store iteration order
    pub async fn snapshot(&self) -> Vec<StationRecord> {
        self.stations.read().await.clone()
    }

    /// Get store metadata
    pub async fn metadata(&self) -> StoreMetadata {
        StoreMetadata {
            source_path: self.source_path.clone(),
            station_count: self.station_count().await,
        }
    }
}
