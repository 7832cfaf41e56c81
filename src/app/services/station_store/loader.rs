//! Station snapshot loading
//!
//! Reads a JSON array of station documents, as exported from the buoy
//! station collection, into a `MemoryStationStore`.

use super::{LoadStats, MemoryStationStore};
use crate::app::models::StationRecord;
use crate::error::{BuoyError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

impl MemoryStationStore {
    /// Load a station snapshot from a JSON file
    ///
    /// # Errors
    /// * Returns `BuoyError::StoreUnavailable` if the file cannot be read
    /// * Returns `BuoyError::Json` if the file is not a JSON array
    ///
    /// Duplicate station ids keep the first document. Documents that do not
    /// decode as a station are skipped and counted as malformed. Decoded but
    /// invalid stations are kept and counted; radius queries skip them.
    pub async fn load_from_file(path: &Path) -> Result<(Self, LoadStats)> {
        info!("Loading station snapshot from {}", path.display());
        let start_time = Instant::now();

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            BuoyError::store_unavailable(format!("cannot read {}: {}", path.display(), e))
        })?;

        let (stations, mut stats) = Self::parse_documents(&content)?;
        stats.load_duration = start_time.elapsed();

        info!("{}", stats.summary());

        let store = Self {
            stations: Arc::new(RwLock::new(stations)),
            source_path: Some(path.to_path_buf()),
        };

        Ok((store, stats))
    }

    /// Parse station documents, dropping duplicate ids and undecodable documents
    pub(crate) fn parse_documents(content: &str) -> Result<(Vec<StationRecord>, LoadStats)> {
        let documents: Vec<Value> = serde_json::from_str(content)?;

        let mut stats = LoadStats {
            total_records_found: documents.len(),
            ..LoadStats::default()
        };
        let mut seen = HashSet::new();
        let mut stations = Vec::with_capacity(documents.len());

        for (index, document) in documents.into_iter().enumerate() {
            let station_id = document
                .get("station_id")
                .and_then(Value::as_str)
                .map(str::to_string);

            let station: StationRecord = match serde_json::from_value(document) {
                Ok(station) => station,
                Err(e) => {
                    warn!(
                        "Skipping malformed station document {} ({}): {}",
                        index,
                        station_id.as_deref().unwrap_or("<no id>"),
                        e
                    );
                    stats.malformed_records += 1;
                    continue;
                }
            };

            if !seen.insert(station.station_id.clone()) {
                warn!(
                    "Duplicate station found: station_id = {}, name = '{}', keeping existing",
                    station.station_id, station.name
                );
                stats.duplicates_skipped += 1;
                continue;
            }

            if let Err(e) = station.validate() {
                warn!("{}", e);
                stats.malformed_records += 1;
            }

            if !station.has_wind_speed() {
                debug!("Station {} has no wind speed reading", station.station_id);
                stats.missing_wind_speed += 1;
            }

            stations.push(station);
        }

        stats.stations_loaded = stations.len();
        Ok((stations, stats))
    }
}
