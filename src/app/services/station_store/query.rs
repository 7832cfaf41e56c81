//! Station lookup, radius queries and updates for the in-memory store

use super::{MemoryStationStore, StationStore};
use crate::app::models::{Coordinate, StationRecord};
use crate::app::services::geo_filter::{GeoFilter, StationPredicate};
use crate::error::{BuoyError, Result};
use tracing::debug;

impl StationStore for MemoryStationStore {
    async fn find_by_id(&self, station_id: &str) -> Result<StationRecord> {
        self.stations
            .read()
            .await
            .iter()
            .find(|station| station.station_id == station_id)
            .cloned()
            .ok_or_else(|| BuoyError::StationNotFound {
                station_id: station_id.to_string(),
            })
    }

    async fn query_within_radius(
        &self,
        center: Coordinate,
        max_distance_miles: f64,
        predicate: StationPredicate,
    ) -> Result<Vec<StationRecord>> {
        let filter = GeoFilter::new(center, max_distance_miles, predicate);
        let stations = self.stations.read().await;
        Ok(filter.apply(stations.iter()))
    }
}

impl MemoryStationStore {
    /// Replace the station with the same id, or append a new one
    ///
    /// Replacing keeps the station's position in iteration order.
    pub async fn upsert(&self, station: StationRecord) -> Result<()> {
        if station.station_id.trim().is_empty() {
            return Err(BuoyError::malformed("<empty>", "station id cannot be empty"));
        }

        let mut stations = self.stations.write().await;
        match stations
            .iter_mut()
            .find(|existing| existing.station_id == station.station_id)
        {
            Some(existing) => {
                debug!("Replacing station {}", station.station_id);
                *existing = station;
            }
            None => {
                debug!("Adding station {}", station.station_id);
                stations.push(station);
            }
        }
        Ok(())
    }

    /// Remove a station by id, returning it if present
    pub async fn remove(&self, station_id: &str) -> Option<StationRecord> {
        let mut stations = self.stations.write().await;
        let index = stations
            .iter()
            .position(|station| station.station_id == station_id)?;
        Some(stations.remove(index))
    }

    /// Find stations by name pattern (case-insensitive)
    pub async fn find_stations_by_name(&self, pattern: &str) -> Vec<StationRecord> {
        let pattern_lower = pattern.to_lowercase();
        self.stations
            .read()
            .await
            .iter()
            .filter(|station| station.name.to_lowercase().contains(&pattern_lower))
            .cloned()
            .collect()
    }
}
