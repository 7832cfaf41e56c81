//! Tests for station snapshot loading

use super::*;
use crate::app::services::station_store::{MemoryStationStore, StationStore};
use crate::error::BuoyError;
use tempfile::TempDir;

#[tokio::test]
async fn test_memory_store_new() {
    let store = MemoryStationStore::new();

    assert_eq!(store.station_count().await, 0);
    assert!(store.source_path.is_none());
    assert_eq!(store.metadata().await.station_count, 0);
}

#[tokio::test]
async fn test_load_from_file_success() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_snapshot_file(temp_dir.path(), "stations.json").unwrap();

    let (store, stats) = MemoryStationStore::load_from_file(&path).await.unwrap();

    // Duplicate CWBF1 is dropped; the malformed station is kept
    assert_eq!(stats.total_records_found, 6);
    assert_eq!(stats.stations_loaded, 5);
    assert_eq!(stats.duplicates_skipped, 1);
    assert_eq!(stats.malformed_records, 1);
    assert_eq!(stats.missing_wind_speed, 1);
    assert!(stats.has_malformed());

    assert_eq!(store.station_count().await, 5);
    assert_eq!(store.metadata().await.source_path, Some(path));

    let ids: Vec<_> = store
        .snapshot()
        .await
        .into_iter()
        .map(|s| s.station_id)
        .collect();
    assert_eq!(ids, vec!["CWBF1", "PMAF1", "CLBF1", "42036", "BROKEN"]);
}

#[tokio::test]
async fn test_load_keeps_first_duplicate() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_snapshot_file(temp_dir.path(), "stations.json").unwrap();

    let (store, _) = MemoryStationStore::load_from_file(&path).await.unwrap();
    let station = store.snapshot().await.remove(0);

    assert_eq!(station.name, "Clearwater Beach, FL");
    assert_eq!(station.condition.wind_speed, Some(9.0));
}

#[tokio::test]
async fn test_load_from_missing_file_is_store_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let result = MemoryStationStore::load_from_file(&path).await;
    assert!(matches!(result, Err(BuoyError::StoreUnavailable { .. })));
}

#[tokio::test]
async fn test_load_from_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = MemoryStationStore::load_from_file(&path).await;
    assert!(matches!(result, Err(BuoyError::Json(_))));
}

#[test]
fn test_parse_documents_empty_array() {
    let (stations, stats) = MemoryStationStore::parse_documents("[]").unwrap();

    assert!(stations.is_empty());
    assert_eq!(stats.total_records_found, 0);
    assert_eq!(stats.stations_loaded, 0);
    assert!(stats.summary().starts_with("Loaded 0 of 0 stations"));
}

#[test]
fn test_parse_documents_skips_undecodable_documents() {
    let content = r#"[
      {"station_id": "GOOD", "name": "Good", "condition": {"wind_speed_milehour": 8.0},
       "location": {"type": "Point", "coordinates": [-82.8, 27.9]}},
      {"station_id": "NEGDIR", "condition": {"wind_direction_degnorth": -1},
       "location": {"type": "Point", "coordinates": [-82.8, 27.9]}},
      {"station_id": "FRACDIR", "condition": {"wind_direction_degnorth": 12.5}},
      {"station_id": "STRCOORD", "location": {"type": "Point", "coordinates": ["-82.8", 27.9]}},
      {"name": "No id"}
    ]"#;

    let (stations, stats) = MemoryStationStore::parse_documents(content).unwrap();

    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].station_id, "GOOD");
    assert_eq!(stats.total_records_found, 5);
    assert_eq!(stats.stations_loaded, 1);
    assert_eq!(stats.malformed_records, 4);
}

#[tokio::test]
async fn test_load_with_wrongly_typed_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("stations.json");
    std::fs::write(
        &path,
        r#"[
  {"station_id": "CWBF1",
   "condition": {"wind_speed_milehour": 9.0, "wind_direction_degnorth": 230}},
  {"station_id": "BADDIR",
   "condition": {"wind_speed_milehour": 4.0, "wind_direction_degnorth": -1}}
]"#,
    )
    .unwrap();

    let (store, stats) = MemoryStationStore::load_from_file(&path).await.unwrap();

    assert_eq!(stats.malformed_records, 1);
    assert!(store.find_by_id("CWBF1").await.is_ok());
    assert_eq!(store.station_count().await, 1);
}
