//! Data models for buoy rule evaluation
//!
//! This module contains the station record as stored by the station store,
//! the reference coordinate used by rules, and the verdict produced by an
//! evaluation.

use crate::constants::limits;
use crate::error::{BuoyError, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Coordinates
// =============================================================================

/// A point on the Earth's surface in WGS84 decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Check that both values are finite and inside their valid ranges
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (limits::MIN_LONGITUDE..=limits::MAX_LONGITUDE).contains(&self.longitude)
            && (limits::MIN_LATITUDE..=limits::MAX_LATITUDE).contains(&self.latitude)
    }
}

/// GeoJSON-style point as stored with each station
///
/// Coordinates are ordered longitude first, per geospatial convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type", default = "default_point_type")]
    pub kind: String,

    pub coordinates: Vec<f64>,
}

fn default_point_type() -> String {
    "Point".to_string()
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: default_point_type(),
            coordinates: vec![longitude, latitude],
        }
    }

    /// Get the point as a coordinate if it has exactly two values
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.coordinates.as_slice() {
            [longitude, latitude] => Some(Coordinate::new(*longitude, *latitude)),
            _ => None,
        }
    }
}

// =============================================================================
// Station Record
// =============================================================================

/// Latest wind observation reported by a buoy
///
/// Absent values mean the buoy has no reading for that sensor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Wind speed in miles/hour
    #[serde(rename = "wind_speed_milehour", default)]
    pub wind_speed: Option<f64>,

    /// Wind direction in whole degrees from true north
    #[serde(rename = "wind_direction_degnorth", default)]
    pub wind_direction: Option<u16>,

    /// Wind gust speed in miles/hour
    #[serde(rename = "gust_wind_speed_milehour", default)]
    pub wind_gust: Option<f64>,
}

/// One buoy's identity, location and latest observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Unique station identifier
    pub station_id: String,

    /// Display name (advisory only)
    #[serde(default)]
    pub name: String,

    /// Free-text location description (advisory only)
    #[serde(default)]
    pub location_desc: String,

    #[serde(default)]
    pub condition: Condition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,

    /// Distance from a rule's reference point in miles
    ///
    /// Never persisted; only set on copies returned by a radius query.
    #[serde(skip)]
    pub distance_miles: Option<f64>,
}

impl StationRecord {
    /// Create a station record with a location and no readings
    pub fn new(
        station_id: impl Into<String>,
        name: impl Into<String>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            name: name.into(),
            location_desc: String::new(),
            condition: Condition::default(),
            location: Some(GeoPoint::new(longitude, latitude)),
            distance_miles: None,
        }
    }

    /// Set the wind readings
    pub fn with_condition(
        mut self,
        wind_speed: Option<f64>,
        wind_direction: Option<u16>,
        wind_gust: Option<f64>,
    ) -> Self {
        self.condition = Condition {
            wind_speed,
            wind_direction,
            wind_gust,
        };
        self
    }

    /// Set the location description
    pub fn with_location_desc(mut self, location_desc: impl Into<String>) -> Self {
        self.location_desc = location_desc.into();
        self
    }

    /// Station location, if it has a well-formed one
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.location.as_ref().and_then(GeoPoint::coordinate)
    }

    pub fn has_wind_speed(&self) -> bool {
        self.condition.wind_speed.is_some()
    }

    /// Validate the record's location and readings
    ///
    /// A record without a location is valid; it simply never matches a
    /// radius query.
    pub fn validate(&self) -> Result<()> {
        if self.station_id.trim().is_empty() {
            return Err(BuoyError::malformed(
                "<empty>",
                "station id cannot be empty",
            ));
        }

        if let Some(location) = &self.location {
            let Some(coordinate) = location.coordinate() else {
                return Err(BuoyError::malformed(
                    &self.station_id,
                    format!(
                        "location must have exactly 2 coordinates, found {}",
                        location.coordinates.len()
                    ),
                ));
            };

            if !coordinate.is_valid() {
                return Err(BuoyError::malformed(
                    &self.station_id,
                    format!(
                        "coordinates out of range: longitude {}, latitude {}",
                        coordinate.longitude, coordinate.latitude
                    ),
                ));
            }
        }

        for (field, value) in [
            ("wind speed", self.condition.wind_speed),
            ("wind gust", self.condition.wind_gust),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(BuoyError::malformed(
                        &self.station_id,
                        format!("invalid {}: {}", field, value),
                    ));
                }
            }
        }

        if let Some(direction) = self.condition.wind_direction {
            if direction > limits::MAX_WIND_DIRECTION {
                return Err(BuoyError::malformed(
                    &self.station_id,
                    format!("invalid wind direction: {} degrees", direction),
                ));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Verdict
// =============================================================================

/// Outcome of one rule evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Average wind speed exceeded the rule's threshold
    Unsafe { average_wind_speed: f64 },

    /// Conditions are acceptable; carries the supporting stations
    Safe {
        average_wind_speed: f64,
        lowest_gust: StationRecord,
        closest: StationRecord,
    },
}

impl Verdict {
    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe { .. })
    }

    pub fn average_wind_speed(&self) -> f64 {
        match self {
            Verdict::Unsafe { average_wind_speed } | Verdict::Safe { average_wind_speed, .. } => {
                *average_wind_speed
            }
        }
    }
}
