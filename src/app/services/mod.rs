//! Core business logic services

pub mod aggregator;
pub mod geo_filter;
pub mod rule_evaluator;
pub mod station_store;
