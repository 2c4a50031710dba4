//! # Synthetic Data Generation
//!
//! Produces illustrative household energy data: daily consumption series,
//! single-day hourly profiles, per-appliance breakdowns, and the weather
//! context that drives heating and cooling demand.
//!
//! All generators draw from a seedable RNG and take their reference date as
//! an explicit parameter, so callers (and tests) control both sources of
//! nondeterminism. The data is intentionally synthetic; no statistical
//! realism is promised beyond plausible shapes.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use home_energy_insights::domain::HouseholdProfile;
//! use home_energy_insights::simulation::{ConsumptionSimulator, SimulatorConfig};
//!
//! let config = SimulatorConfig {
//!     profile: HouseholdProfile::LargeHouse,
//!     random_seed: Some(42),
//! };
//!
//! let mut sim = ConsumptionSimulator::new(config);
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//!
//! let series = sim.daily_series(30, today).unwrap();
//! assert_eq!(series.len(), 31); // inclusive of both endpoints
//! ```

pub mod appliances;
pub mod consumption;
pub mod weather;

pub use appliances::ApplianceSimulator;
pub use consumption::{ConsumptionSimulator, SimulatorConfig};
pub use weather::{WeatherCondition, WeatherRecord, WeatherSimulator};

/// Errors from the synthetic generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// A window of zero days cannot produce a meaningful series; callers
    /// must ask for at least one day back from the end date.
    #[error("day count must be at least 1")]
    InvalidDayCount,
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
