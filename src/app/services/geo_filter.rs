//! Radius-bounded station selection
//!
//! Computes great-circle distances from a reference point and keeps the
//! stations that fall within a maximum radius and satisfy a field predicate.
//! Every kept station is a copy annotated with its distance in miles.

use crate::app::models::{Coordinate, StationRecord};
use crate::constants::EARTH_RADIUS_MILES;
use tracing::{debug, warn};

/// Field-presence requirement a station must meet to qualify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StationPredicate {
    /// Every located station qualifies
    #[default]
    Any,
    /// Station must have a wind speed reading
    HasWindSpeed,
}

impl StationPredicate {
    pub fn matches(&self, station: &StationRecord) -> bool {
        match self {
            StationPredicate::Any => true,
            StationPredicate::HasWindSpeed => station.has_wind_speed(),
        }
    }
}

/// Great-circle distance between two points in miles
///
/// Haversine formula on a sphere of radius `EARTH_RADIUS_MILES`. Symmetric in
/// its arguments and zero for identical points.
pub fn great_circle_distance_miles(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.latitude - from.latitude).abs().to_radians();
    let d_lon = (to.longitude - from.longitude).abs().to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` just past 1 for antipodal points
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_MILES * c
}

/// Selection of stations around a reference point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFilter {
    pub center: Coordinate,
    pub max_distance_miles: f64,
    pub predicate: StationPredicate,
}

impl GeoFilter {
    pub fn new(center: Coordinate, max_distance_miles: f64, predicate: StationPredicate) -> Self {
        Self {
            center,
            max_distance_miles,
            predicate,
        }
    }

    /// Distance from the center to a station, if it has a usable location
    pub fn distance_to(&self, station: &StationRecord) -> Option<f64> {
        station
            .coordinate()
            .map(|coordinate| great_circle_distance_miles(self.center, coordinate))
    }

    /// Keep qualifying stations, in input order, annotated with their distance
    ///
    /// Malformed stations are skipped with a warning; stations without a
    /// location are skipped silently. An empty result is not an error.
    pub fn apply<'a, I>(&self, stations: I) -> Vec<StationRecord>
    where
        I: IntoIterator<Item = &'a StationRecord>,
    {
        let mut selected = Vec::new();
        let mut malformed = 0usize;

        for station in stations {
            if let Err(e) = station.validate() {
                warn!("Skipping station during geo filter: {}", e);
                malformed += 1;
                continue;
            }

            if !self.predicate.matches(station) {
                continue;
            }

            let Some(distance) = self.distance_to(station) else {
                continue;
            };

            if distance <= self.max_distance_miles {
                let mut annotated = station.clone();
                annotated.distance_miles = Some(distance);
                selected.push(annotated);
            }
        }

        debug!(
            "Geo filter kept {} stations within {} miles of ({}, {}), {} malformed",
            selected.len(),
            self.max_distance_miles,
            self.center.latitude,
            self.center.longitude,
            malformed
        );

        selected
    }
}
