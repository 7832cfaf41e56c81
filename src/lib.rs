//! Buoy Rules Library
//!
//! A Rust library that decides whether it is safe to go fishing near a
//! reference point by analysing the latest wind observations of nearby
//! ocean buoys.
//!
//! This library provides tools for:
//! - Loading buoy station snapshots and serving radius queries
//! - Great-circle distance filtering around a reference point
//! - Mean, lowest-gust and closest-station reductions over the filtered set
//! - Named, data-driven rule configurations evaluated into verdicts

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod report;
}

// Re-export commonly used types
pub use app::models::{Condition, Coordinate, GeoPoint, StationRecord, Verdict};
pub use app::services::rule_evaluator::{RuleEngine, RuleEvaluator};
pub use app::services::station_store::{MemoryStationStore, StationPredicate, StationStore};
pub use config::{RuleConfig, RuleRegistry};
pub use error::{BuoyError, Result};
