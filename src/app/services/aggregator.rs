//! Reductions over a qualifying station set
//!
//! Three independent, stateless passes: the mean wind speed, the station with
//! the lowest wind gust, and the station closest to the reference point. Each
//! fails with `EmptyResultSet` rather than returning a default when nothing
//! qualifies.
//!
//! A station without a gust reading sorts ahead of every station with one.
//!
//! Arg-min ties resolve to the station encountered first, so results follow
//! the iteration order of the input slice.

use crate::app::models::StationRecord;
use crate::error::{BuoyError, Result};

/// Reduction names used in `EmptyResultSet` errors
pub mod reductions {
    pub const MEAN_WIND_SPEED: &str = "mean wind speed";
    pub const MIN_WIND_GUST: &str = "lowest wind gust";
    pub const MIN_DISTANCE: &str = "closest station";
}

/// Arithmetic mean of the wind speed readings
///
/// Stations without a reading do not contribute.
pub fn mean_wind_speed(stations: &[StationRecord]) -> Result<f64> {
    let (total, count) = stations
        .iter()
        .filter_map(|station| station.condition.wind_speed)
        .fold((0.0, 0usize), |(total, count), speed| (total + speed, count + 1));

    if count == 0 {
        return Err(BuoyError::EmptyResultSet {
            reduction: reductions::MEAN_WIND_SPEED,
        });
    }

    Ok(total / count as f64)
}

/// Station with the lowest wind gust
///
/// A missing gust reading ranks below every reading, so this only fails on an
/// empty input.
pub fn arg_min_wind_gust(stations: &[StationRecord]) -> Result<&StationRecord> {
    arg_min_by(stations, reductions::MIN_WIND_GUST, |station| {
        Some(station.condition.wind_gust.unwrap_or(f64::NEG_INFINITY))
    })
}

/// Station closest to the reference point; stations without a computed distance are not candidates
pub fn arg_min_distance(stations: &[StationRecord]) -> Result<&StationRecord> {
    arg_min_by(stations, reductions::MIN_DISTANCE, |station| {
        station.distance_miles
    })
}

fn arg_min_by<'a, F>(
    stations: &'a [StationRecord],
    reduction: &'static str,
    key: F,
) -> Result<&'a StationRecord>
where
    F: Fn(&StationRecord) -> Option<f64>,
{
    // `min_by` returns the first of several equal minimums
    stations
        .iter()
        .filter_map(|station| key(station).map(|value| (station, value)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(station, _)| station)
        .ok_or(BuoyError::EmptyResultSet { reduction })
}
