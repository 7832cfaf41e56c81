//! Shared test utilities and fixtures for station store tests

use crate::app::models::StationRecord;
use std::fs;
use std::path::{Path, PathBuf};

pub mod loader_tests;

/// Create a test station with standard parameters
pub fn create_test_station(
    station_id: &str,
    lon: f64,
    lat: f64,
    wind_speed: Option<f64>,
    wind_gust: Option<f64>,
) -> StationRecord {
    StationRecord::new(station_id, format!("Station {}", station_id), lon, lat)
        .with_condition(wind_speed, Some(270), wind_gust)
        .with_location_desc("Test location")
}

/// Station snapshot file in the store's document format
pub fn create_test_snapshot_file(dir: &Path, filename: &str) -> std::io::Result<PathBuf> {
    let file_path = dir.join(filename);

    let content = r#"[
  {
    "station_id": "CWBF1",
    "name": "Clearwater Beach, FL",
    "location_desc": "Clearwater Beach",
    "condition": {
      "wind_speed_milehour": 9.0,
      "wind_direction_degnorth": 230,
      "gust_wind_speed_milehour": 12.0
    },
    "location": { "type": "Point", "coordinates": [-82.832, 27.978] }
  },
  {
    "station_id": "PMAF1",
    "name": "Port Manatee, FL",
    "location_desc": "Tampa Bay",
    "condition": {
      "wind_speed_milehour": 11.0,
      "wind_direction_degnorth": 240,
      "gust_wind_speed_milehour": 14.0
    },
    "location": { "type": "Point", "coordinates": [-82.562, 27.629] }
  },
  {
    "station_id": "CLBF1",
    "name": "Clearwater, FL",
    "location_desc": "Clearwater",
    "condition": {
      "wind_speed_milehour": null,
      "wind_direction_degnorth": null,
      "gust_wind_speed_milehour": null
    },
    "location": { "type": "Point", "coordinates": [-82.778, 27.963] }
  },
  {
    "station_id": "42036",
    "name": "West Tampa",
    "location_desc": "106 NM WNW of Tampa, FL",
    "condition": {
      "wind_speed_milehour": 22.0,
      "wind_direction_degnorth": 100,
      "gust_wind_speed_milehour": 27.0
    },
    "location": { "type": "Point", "coordinates": [-84.517, 28.5] }
  },
  {
    "station_id": "CWBF1",
    "name": "Clearwater Beach duplicate",
    "condition": { "wind_speed_milehour": 50.0 },
    "location": { "type": "Point", "coordinates": [-82.832, 27.978] }
  },
  {
    "station_id": "BROKEN",
    "name": "Broken coordinates",
    "condition": { "wind_speed_milehour": 1.0 },
    "location": { "type": "Point", "coordinates": [-82.8, 127.9] }
  }
]"#;

    fs::write(&file_path, content)?;
    Ok(file_path)
}
