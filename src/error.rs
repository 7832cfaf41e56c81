//! Error handling for buoy rule evaluation.
//!
//! Provides error types for station store access, empty reductions,
//! malformed station records and rule configuration failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuoyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Station store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("No qualifying stations for {reduction}")]
    EmptyResultSet { reduction: &'static str },

    #[error("Malformed station record {station_id}: {reason}")]
    MalformedRecord { station_id: String, reason: String },

    #[error("Station not found: {station_id}")]
    StationNotFound { station_id: String },

    #[error("Unknown rule: {name}")]
    UnknownRule { name: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Rules file not found: {path}")]
    RulesFileNotFound { path: PathBuf },
}

impl BuoyError {
    /// Create a store unavailable error
    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a malformed record error
    pub fn malformed(station_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            station_id: station_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the error is an expected "nothing qualified" outcome rather than a fault
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResultSet { .. })
    }
}

pub type Result<T> = std::result::Result<T, BuoyError>;
