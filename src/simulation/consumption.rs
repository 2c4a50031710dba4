//! # Household Consumption Simulation
//!
//! Synthesizes daily consumption series and single-day hourly profiles with
//! seasonal, weekday, and temperature-driven patterns plus bounded random
//! variation and occasional anomalous spike days.

use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::domain::{
    DailyRecord, DailySeries, HourlyProfile, HourlyRecord, HouseholdProfile, TimePeriod,
};
use crate::simulation::{round2, round3, SimulationError};

/// Per-day spike probability and the multiplier range applied on spike days
const SPIKE_PROBABILITY: f64 = 0.05;
const SPIKE_RANGE: std::ops::RangeInclusive<f64> = 1.5..=2.0;

/// Hour-of-day multipliers encoding the morning and evening peaks
const HOURLY_PATTERN: [f64; 24] = [
    0.6, 0.5, 0.4, 0.4, 0.5, 0.7, // 00-05 overnight trough
    1.2, 1.8, 1.5, 1.0, 0.8, 0.9, // 06-11 morning peak
    1.0, 0.9, 0.8, 0.8, 1.1, 1.4, // 12-17 afternoon
    1.8, 2.0, 1.9, 1.6, 1.2, 0.9, // 18-23 evening peak
];

/// Consumption simulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Household profile driving base consumption
    pub profile: HouseholdProfile,
    /// Random seed for reproducibility (None = random)
    pub random_seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            profile: HouseholdProfile::MediumHouse,
            random_seed: None,
        }
    }
}

pub struct ConsumptionSimulator {
    profile: HouseholdProfile,
    rng: StdRng,
}

impl ConsumptionSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            profile: config.profile,
            rng,
        }
    }

    pub fn profile(&self) -> HouseholdProfile {
        self.profile
    }

    /// Generate a daily series covering `end_date - day_count ..= end_date`.
    ///
    /// The range is inclusive of both endpoints, so the result always holds
    /// `day_count + 1` records. A zero day count is rejected.
    pub fn daily_series(
        &mut self,
        day_count: u32,
        end_date: NaiveDate,
    ) -> Result<DailySeries, SimulationError> {
        if day_count == 0 {
            return Err(SimulationError::InvalidDayCount);
        }

        let base_kwh = self.profile.base_daily_kwh();
        let start_date = end_date - Duration::days(i64::from(day_count));

        let mut records = Vec::with_capacity(day_count as usize + 1);
        for offset in 0..=i64::from(day_count) {
            let date = start_date + Duration::days(offset);
            records.push(DailyRecord::new(date, self.daily_consumption(base_kwh, date)));
        }

        Ok(DailySeries::from_records(records))
    }

    /// Generate the 24-hour profile for a single date
    pub fn hourly_profile(&mut self, date: NaiveDate) -> HourlyProfile {
        let base_hourly = self.profile.base_hourly_kwh();

        let records = (0..24u32)
            .map(|hour| {
                let consumption =
                    base_hourly * HOURLY_PATTERN[hour as usize] * self.rng.gen_range(0.8..=1.2);
                HourlyRecord {
                    hour,
                    consumption: round3(consumption),
                    time: format!("{hour:02}:00"),
                    period: TimePeriod::from_hour(hour),
                }
            })
            .collect();

        HourlyProfile { date, records }
    }

    fn daily_consumption(&mut self, base_kwh: f64, date: NaiveDate) -> f64 {
        let day_of_year = f64::from(date.ordinal());

        let seasonal_factor = 1.0 + 0.3 * (2.0 * PI * day_of_year / 365.0).sin();

        let is_weekend = date.weekday().num_days_from_monday() >= 5;
        let weekend_factor = if is_weekend { 1.2 } else { 0.9 };

        // Phase-shifted against the seasonal curve: heating demand rises as
        // the seasonal factor falls, and vice versa for cooling.
        let temperature_factor = 1.0 + 0.2 * (2.0 * PI * day_of_year / 365.0 + PI).sin();

        let random_factor = self.rng.gen_range(0.8..=1.2);

        let mut consumption =
            base_kwh * seasonal_factor * weekend_factor * temperature_factor * random_factor;

        // Occasional anomalous high-usage day (guests, laundry marathon, ...)
        if self.rng.gen_bool(SPIKE_PROBABILITY) {
            consumption *= self.rng.gen_range(SPIKE_RANGE);
        }

        round2(consumption)
    }
}
