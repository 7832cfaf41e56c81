//! Application constants for buoy rule evaluation
//!
//! Earth model, default rule values and file locations used throughout
//! the crate.

// =============================================================================
// Earth Model
// =============================================================================

/// Radius of the Earth in miles (spherical approximation)
///
/// Every distance in the crate is scaled by this value so that rankings from
/// different reductions are comparable.
pub const EARTH_RADIUS_MILES: f64 = 3963.192;

// =============================================================================
// Default Rule: Clearwater, Florida (Tampa area)
// =============================================================================

/// Name of the built-in rule
pub const DEFAULT_RULE_NAME: &str = "tampa";

/// Reference point for the built-in rule
/// https://maps.google.com/maps?q=27.945886,-82.798676&z=10
pub mod tampa {
    pub const LATITUDE: f64 = 27.945886;
    pub const LONGITUDE: f64 = -82.798676;

    /// Buoys within this many miles are considered
    pub const MAX_DISTANCE_MILES: f64 = 30.0;

    /// Highest acceptable average wind speed in miles/hour
    pub const MAX_AVG_WIND_SPEED: f64 = 15.0;
}

// =============================================================================
// Station Record Limits
// =============================================================================

pub mod limits {
    pub const MIN_LATITUDE: f64 = -90.0;
    pub const MAX_LATITUDE: f64 = 90.0;
    pub const MIN_LONGITUDE: f64 = -180.0;
    pub const MAX_LONGITUDE: f64 = 180.0;

    /// Wind direction is whole degrees from true north
    pub const MAX_WIND_DIRECTION: u16 = 359;
}

// =============================================================================
// Files
// =============================================================================

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "buoy-rules";

/// Rules file name inside the config directory
pub const RULES_FILE_NAME: &str = "rules.toml";

/// Station snapshot file name inside the config directory
pub const STATIONS_FILE_NAME: &str = "buoy_stations.json";
