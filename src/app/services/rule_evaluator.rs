//! Rule evaluation
//!
//! A `RuleEvaluator` answers one question for one configured reference point:
//! is the average wind speed of nearby buoys low enough to go out? It fetches
//! the qualifying stations once, then runs every reduction on that same
//! snapshot:
//!
//! 1. mean wind speed; no qualifying station fails the evaluation
//! 2. mean above the threshold gives `Verdict::Unsafe`
//! 3. lowest gust and closest station; a missing gust ranks lowest
//! 4. otherwise `Verdict::Safe`
//!
//! `RuleEngine` resolves rule names through a `RuleRegistry` and can run
//! every configured rule concurrently.

use crate::app::models::{StationRecord, Verdict};
use crate::app::services::aggregator;
use crate::app::services::station_store::{StationPredicate, StationStore};
use crate::config::{RuleConfig, RuleRegistry};
use crate::error::Result;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// Evaluates one rule configuration against a station store
#[derive(Debug)]
pub struct RuleEvaluator<S> {
    store: Arc<S>,
    config: RuleConfig,
}

impl<S: StationStore> RuleEvaluator<S> {
    pub fn new(store: Arc<S>, config: RuleConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Stations within the rule's radius that have a wind speed reading
    pub async fn qualifying_stations(&self) -> Result<Vec<StationRecord>> {
        self.store
            .query_within_radius(
                self.config.reference_point(),
                self.config.max_distance_miles,
                StationPredicate::HasWindSpeed,
            )
            .await
    }

    /// Run the rule
    ///
    /// The first failure ends the evaluation; no partial verdict is returned.
    /// Nothing is retried.
    pub async fn evaluate(&self) -> Result<Verdict> {
        let stations = self.qualifying_stations().await?;
        debug!("{} qualifying stations", stations.len());

        let average_wind_speed = aggregator::mean_wind_speed(&stations)?;

        if average_wind_speed > self.config.max_avg_wind_speed {
            info!(
                "Average wind speed {:.2} exceeds {:.2}",
                average_wind_speed, self.config.max_avg_wind_speed
            );
            return Ok(Verdict::Unsafe { average_wind_speed });
        }

        let lowest_gust = aggregator::arg_min_wind_gust(&stations)?.clone();
        let closest = aggregator::arg_min_distance(&stations)?.clone();

        info!(
            "Average wind speed {:.2} within {:.2}; lowest gust at {}, closest is {}",
            average_wind_speed,
            self.config.max_avg_wind_speed,
            lowest_gust.station_id,
            closest.station_id
        );

        Ok(Verdict::Safe {
            average_wind_speed,
            lowest_gust,
            closest,
        })
    }
}

/// Named rule evaluation over a shared station store
#[derive(Debug)]
pub struct RuleEngine<S> {
    store: Arc<S>,
    registry: RuleRegistry,
}

impl<S: StationStore> RuleEngine<S> {
    pub fn new(store: Arc<S>, registry: RuleRegistry) -> Self {
        Self { store, registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Build the evaluator for a named rule
    ///
    /// Returns `BuoyError::UnknownRule` if the name is not configured.
    pub fn evaluator(&self, rule_name: &str) -> Result<RuleEvaluator<S>> {
        let config = self.registry.get(rule_name)?.clone();
        Ok(RuleEvaluator::new(Arc::clone(&self.store), config))
    }

    /// Evaluate a named rule
    pub async fn evaluate(&self, rule_name: &str) -> Result<Verdict> {
        info!("Running rule '{}'", rule_name);
        self.evaluator(rule_name)?.evaluate().await
    }

    /// Evaluate every configured rule concurrently, in rule name order
    ///
    /// Each evaluation works on its own copy of the qualifying stations; one
    /// rule failing does not affect the others.
    pub async fn evaluate_all(&self) -> Vec<(String, Result<Verdict>)> {
        let names: Vec<String> = self.registry.names().map(str::to_string).collect();
        let results = join_all(names.iter().map(|name| self.evaluate(name))).await;
        names.into_iter().zip(results).collect()
    }
}
