//! Command-line argument definitions for the buoy rule engine
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_RULE_NAME;
use crate::error::{BuoyError, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the buoy rule engine
///
/// Decides whether wind conditions reported by nearby ocean buoys are safe
/// for going fishing.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "buoy-rules",
    version,
    about = "Decide whether nearby buoy wind conditions are safe for fishing",
    long_about = "Evaluates named rules against a snapshot of ocean buoy observations. Each rule \
                  averages the wind speed of every buoy within a radius of a reference point and \
                  compares it to a threshold. Safe verdicts also report the buoy with the lowest \
                  wind gust and the buoy closest to the reference point."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Station snapshot file (JSON array of station documents)
    ///
    /// Defaults to buoy_stations.json in the user config directory.
    #[arg(
        short = 's',
        long = "stations",
        value_name = "PATH",
        global = true,
        help = "Station snapshot file"
    )]
    pub stations_path: Option<PathBuf>,

    /// Rules file (TOML); its rules are added to the built-in ones
    ///
    /// Defaults to rules.toml in the user config directory if it exists.
    #[arg(
        short = 'r',
        long = "rules",
        value_name = "PATH",
        global = true,
        help = "Rules file"
    )]
    pub rules_path: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Evaluate a rule (default command)
    Evaluate(EvaluateArgs),
    /// List configured rules
    Rules,
    /// Show station records
    Station(StationArgs),
}

/// Arguments for the evaluate command
#[derive(Debug, Clone, Default, Parser)]
pub struct EvaluateArgs {
    /// Rule to evaluate
    #[arg(value_name = "RULE", help = "Rule to evaluate (default: tampa)")]
    pub rule: Option<String>,

    /// Evaluate every configured rule
    #[arg(long = "all", conflicts_with = "rule")]
    pub all: bool,
}

/// Arguments for the station command
#[derive(Debug, Clone, Parser)]
pub struct StationArgs {
    /// Station identifier to look up
    #[arg(value_name = "STATION_ID")]
    pub station_id: Option<String>,

    /// Find stations whose name contains this text (case-insensitive)
    #[arg(long = "name", value_name = "TEXT", conflicts_with = "station_id")]
    pub name: Option<String>,
}

impl Args {
    /// Get the command, defaulting to evaluating the built-in rule
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Evaluate(EvaluateArgs::default()))
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl EvaluateArgs {
    /// Rule name to evaluate
    pub fn rule_name(&self) -> &str {
        self.rule.as_deref().unwrap_or(DEFAULT_RULE_NAME)
    }
}

impl StationArgs {
    /// Validate that exactly one lookup was requested
    pub fn validate(&self) -> Result<()> {
        match (&self.station_id, &self.name) {
            (None, None) => Err(BuoyError::configuration(
                "Specify a station id or --name".to_string(),
            )),
            (Some(id), _) if id.trim().is_empty() => Err(BuoyError::configuration(
                "Station id cannot be empty".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
