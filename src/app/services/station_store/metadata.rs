//! Station store metadata and load statistics

use std::path::PathBuf;
use std::time::Duration;

/// Statistics about loading a station snapshot file
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Number of station documents in the file
    pub total_records_found: usize,

    /// Number of stations kept in the store
    pub stations_loaded: usize,

    /// Documents dropped because their station id was already loaded
    pub duplicates_skipped: usize,

    /// Documents that fail to decode (dropped) or fail validation (kept, never
    /// selected by a radius query)
    pub malformed_records: usize,

    /// Stations without a wind speed reading
    pub missing_wind_speed: usize,

    /// Time taken to load the file
    pub load_duration: Duration,
}

impl LoadStats {
    /// Check if any loaded station is malformed
    pub fn has_malformed(&self) -> bool {
        self.malformed_records > 0
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} of {} stations ({} duplicate, {} malformed, {} no wind speed) in {:.3}s",
            self.stations_loaded,
            self.total_records_found,
            self.duplicates_skipped,
            self.malformed_records,
            self.missing_wind_speed,
            self.load_duration.as_secs_f64()
        )
    }
}

/// Metadata about the station store
#[derive(Debug, Clone)]
pub struct StoreMetadata {
    /// File the snapshot was loaded from
    pub source_path: Option<PathBuf>,

    /// Total number of stations in the store
    pub station_count: usize,
}
