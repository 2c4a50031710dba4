//! # Home Energy Insights
//!
//! Synthesizes illustrative household energy-consumption data and derives
//! the metrics a dashboard front-end renders: daily and hourly series,
//! appliance breakdowns, summary statistics, cost projections, time-of-use
//! savings, carbon footprint, and efficiency ratings.

pub mod analysis;
pub mod api;
pub mod config;
pub mod domain;
pub mod simulation;
pub mod telemetry;
