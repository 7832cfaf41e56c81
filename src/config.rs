//! Rule configuration management and validation.
//!
//! Provides the immutable per-rule configuration and the registry that maps
//! rule names to configurations, loaded from a TOML rules file or built from
//! defaults.

use crate::app::models::Coordinate;
use crate::constants::{self, tampa};
use crate::error::{BuoyError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Parameters for one evaluable rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Reference latitude in decimal degrees
    pub latitude: f64,

    /// Reference longitude in decimal degrees
    pub longitude: f64,

    /// Only buoys within this many miles are considered
    pub max_distance_miles: f64,

    /// Highest acceptable average wind speed in miles/hour
    pub max_avg_wind_speed: f64,
}

impl RuleConfig {
    /// Create a validated rule configuration
    pub fn new(
        latitude: f64,
        longitude: f64,
        max_distance_miles: f64,
        max_avg_wind_speed: f64,
    ) -> Result<Self> {
        let config = Self {
            latitude,
            longitude,
            max_distance_miles,
            max_avg_wind_speed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Built-in rule for Clearwater, Florida
    pub fn tampa() -> Self {
        Self {
            latitude: tampa::LATITUDE,
            longitude: tampa::LONGITUDE,
            max_distance_miles: tampa::MAX_DISTANCE_MILES,
            max_avg_wind_speed: tampa::MAX_AVG_WIND_SPEED,
        }
    }

    pub fn reference_point(&self) -> Coordinate {
        Coordinate::new(self.longitude, self.latitude)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.reference_point().is_valid() {
            return Err(BuoyError::configuration(format!(
                "Invalid reference point: latitude {}, longitude {}",
                self.latitude, self.longitude
            )));
        }

        if !self.max_distance_miles.is_finite() || self.max_distance_miles < 0.0 {
            return Err(BuoyError::configuration(format!(
                "Max distance must be a non-negative number of miles, got {}",
                self.max_distance_miles
            )));
        }

        if !self.max_avg_wind_speed.is_finite() || self.max_avg_wind_speed < 0.0 {
            return Err(BuoyError::configuration(format!(
                "Max average wind speed must be non-negative, got {}",
                self.max_avg_wind_speed
            )));
        }

        Ok(())
    }
}

/// Named rule configurations
///
/// Rules are looked up by name; adding a rule is a table entry, not code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRegistry {
    #[serde(default)]
    rules: BTreeMap<String, RuleConfig>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(constants::DEFAULT_RULE_NAME.to_string(), RuleConfig::tampa());
        Self { rules }
    }
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Parse a registry from TOML text and validate every rule
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let registry: Self = toml::from_str(content)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load a registry from a TOML rules file
    ///
    /// Rules in the file are added on top of the built-in rules; a rule in
    /// the file with a built-in name replaces it.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BuoyError::RulesFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = tokio::fs::read_to_string(path).await?;
        let loaded = Self::from_toml_str(&content)?;
        info!("Loaded {} rules from {}", loaded.len(), path.display());

        let mut registry = Self::default();
        for (name, config) in loaded.rules {
            registry.insert(name, config)?;
        }
        Ok(registry)
    }

    /// Load the rules file at `path` if given, else the default location,
    /// else fall back to the built-in rules
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => match default_rules_path() {
                Some(path) if path.exists() => Self::load(&path).await,
                _ => {
                    debug!("No rules file found, using built-in rules");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Add or replace a rule
    pub fn insert(&mut self, name: impl Into<String>, config: RuleConfig) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BuoyError::configuration("Rule name cannot be empty"));
        }
        config.validate()?;
        self.rules.insert(name, config);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&RuleConfig> {
        self.rules.get(name).ok_or_else(|| BuoyError::UnknownRule {
            name: name.to_string(),
        })
    }

    /// Rule names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleConfig)> {
        self.rules.iter().map(|(name, config)| (name.as_str(), config))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for (name, config) in &self.rules {
            config.validate().map_err(|e| {
                BuoyError::configuration(format!("Rule '{}': {}", name, e))
            })?;
        }
        Ok(())
    }
}

/// Default rules file location, e.g. ~/.config/buoy-rules/rules.toml
pub fn default_rules_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::RULES_FILE_NAME)
    })
}

/// Default station snapshot location, e.g. ~/.config/buoy-rules/buoy_stations.json
pub fn default_stations_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::STATIONS_FILE_NAME)
    })
}
