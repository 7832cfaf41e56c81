//! Command implementations for the buoy rule engine CLI
//!
//! Sets up logging, loads the rules and the station snapshot, then dispatches
//! to the requested subcommand. Every verdict, safe or not, is a successful
//! run; only errors make the process fail.

use crate::app::services::rule_evaluator::RuleEngine;
use crate::app::services::station_store::{MemoryStationStore, StationStore};
use crate::cli::args::{Args, Commands, EvaluateArgs, StationArgs};
use crate::cli::report;
use crate::config::{self, RuleRegistry};
use crate::error::{BuoyError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Outcome counts of a CLI run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rules_evaluated: usize,
    pub safe: usize,
    pub not_safe: usize,
    pub failed: usize,
}

/// Main command runner
pub async fn run(args: Args) -> Result<RunSummary> {
    setup_logging(&args)?;
    debug!("Arguments: {:?}", args);

    let registry = RuleRegistry::load_or_default(args.rules_path.as_deref()).await?;

    match args.get_command() {
        Commands::Rules => {
            print!("{}", report::render_rules(&registry));
            Ok(RunSummary::default())
        }
        Commands::Evaluate(evaluate_args) => {
            let store = load_store(&args).await?;
            run_evaluate(evaluate_args, store, registry, !args.quiet).await
        }
        Commands::Station(station_args) => {
            station_args.validate()?;
            let store = load_store(&args).await?;
            run_station(station_args, &store).await?;
            Ok(RunSummary::default())
        }
    }
}

/// Evaluate one rule or all of them and print the verdicts
///
/// A single rule's error is returned; with `--all`, failed rules are printed
/// and counted in the summary.
pub async fn run_evaluate(
    args: EvaluateArgs,
    store: MemoryStationStore,
    registry: RuleRegistry,
    show_progress: bool,
) -> Result<RunSummary> {
    let engine = RuleEngine::new(Arc::new(store), registry);

    if !args.all {
        let rule_name = args.rule_name();
        let verdict = engine.evaluate(rule_name).await?;
        print!("{}", report::render_verdict(rule_name, &verdict));
        return Ok(RunSummary {
            rules_evaluated: 1,
            safe: usize::from(verdict.is_safe()),
            not_safe: usize::from(!verdict.is_safe()),
            failed: 0,
        });
    }

    let spinner = show_progress.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Evaluating {} rules...", engine.registry().len()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let results = engine.evaluate_all().await;

    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    let mut summary = RunSummary::default();
    for (rule_name, outcome) in &results {
        print!("{}", report::render_outcome(rule_name, outcome));
        summary.rules_evaluated += 1;
        match outcome {
            Ok(verdict) if verdict.is_safe() => summary.safe += 1,
            Ok(_) => summary.not_safe += 1,
            Err(_) => summary.failed += 1,
        }
    }

    info!(
        "Evaluated {} rules: {} safe, {} unsafe, {} failed",
        summary.rules_evaluated, summary.safe, summary.not_safe, summary.failed
    );

    Ok(summary)
}

/// Look up stations by id or name and print them
pub async fn run_station(args: StationArgs, store: &MemoryStationStore) -> Result<()> {
    if let Some(station_id) = &args.station_id {
        let station = store.find_by_id(station_id).await?;
        print!("{}", report::render_station("Station", &station, None));
        return Ok(());
    }

    let pattern = args.name.as_deref().unwrap_or_default();
    let stations = store.find_stations_by_name(pattern).await;
    if stations.is_empty() {
        println!("No stations match '{}'", pattern);
    }
    for station in &stations {
        print!("{}", report::render_station(&station.name, station, None));
    }
    Ok(())
}

/// Load the station snapshot from `--stations` or the default location
async fn load_store(args: &Args) -> Result<MemoryStationStore> {
    let path: PathBuf = match &args.stations_path {
        Some(path) => path.clone(),
        None => config::default_stations_path().ok_or_else(|| {
            BuoyError::store_unavailable(
                "no station snapshot given and no config directory available",
            )
        })?,
    };

    let (store, stats) = MemoryStationStore::load_from_file(&path).await?;
    debug!("{}", stats.summary());

    let metadata = store.metadata().await;
    info!(
        "Using {} stations from {}",
        metadata.station_count,
        metadata
            .source_path
            .as_deref()
            .map_or_else(|| "memory".to_string(), |p| p.display().to_string())
    );
    Ok(store)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("buoy_rules={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| BuoyError::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::StationRecord;
    use crate::config::RuleConfig;

    fn store() -> MemoryStationStore {
        MemoryStationStore::from_records(vec![
            StationRecord::new("CWBF1", "Clearwater Beach", -82.832, 27.978)
                .with_condition(Some(9.0), Some(230), Some(12.0)),
            StationRecord::new("KW", "Key West", -81.80, 24.55)
                .with_condition(Some(30.0), Some(90), Some(35.0)),
        ])
    }

    #[tokio::test]
    async fn test_run_evaluate_single_rule() {
        let summary = run_evaluate(EvaluateArgs::default(), store(), RuleRegistry::default(), false)
            .await
            .unwrap();
        assert_eq!(
            summary,
            RunSummary {
                rules_evaluated: 1,
                safe: 1,
                not_safe: 0,
                failed: 0
            }
        );
    }

    #[tokio::test]
    async fn test_run_evaluate_unknown_rule_fails() {
        let args = EvaluateArgs {
            rule: Some("atlantis".to_string()),
            all: false,
        };
        let result = run_evaluate(args, store(), RuleRegistry::default(), false).await;
        assert!(matches!(result, Err(BuoyError::UnknownRule { .. })));
    }

    #[tokio::test]
    async fn test_run_evaluate_all() {
        let mut registry = RuleRegistry::default();
        registry
            .insert("keywest", RuleConfig::new(24.5551, -81.78, 25.0, 12.0).unwrap())
            .unwrap();

        let args = EvaluateArgs {
            rule: None,
            all: true,
        };
        let summary = run_evaluate(args, store(), registry, false).await.unwrap();
        assert_eq!(summary.rules_evaluated, 2);
        assert_eq!(summary.safe, 1);
        assert_eq!(summary.not_safe, 1);
    }

    #[tokio::test]
    async fn test_run_station_lookup() {
        let store = store();
        let args = StationArgs {
            station_id: Some("KW".to_string()),
            name: None,
        };
        assert!(run_station(args, &store).await.is_ok());

        let args = StationArgs {
            station_id: Some("NOPE".to_string()),
            name: None,
        };
        assert!(matches!(
            run_station(args, &store).await,
            Err(BuoyError::StationNotFound { .. })
        ));
    }
}
