//! # Weather Context Simulation
//!
//! Synthesizes the daily weather backdrop for a consumption series:
//! seasonal temperature swing with random scatter, humidity, sky
//! conditions, and the heating/cooling degree days derived from the
//! 65 °F / 75 °F balance points.

use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::simulation::{round1, SimulationError};

/// Sky condition for a simulated day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum WeatherCondition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    #[strum(serialize = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
    Stormy,
}

impl WeatherCondition {
    /// Draw a random condition (weighted towards fair weather)
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let roll = rng.gen_range(0..100);
        match roll {
            0..=39 => WeatherCondition::Sunny,
            40..=69 => WeatherCondition::PartlyCloudy,
            70..=89 => WeatherCondition::Cloudy,
            90..=97 => WeatherCondition::Rainy,
            _ => WeatherCondition::Stormy,
        }
    }
}

/// One simulated day of weather
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    /// Temperature in °F, rounded to 1 decimal place
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    pub conditions: WeatherCondition,
    /// Degrees below the 65 °F heating balance point (0 when above)
    pub heating_degree_days: f64,
    /// Degrees above the 75 °F cooling balance point (0 when below)
    pub cooling_degree_days: f64,
}

pub struct WeatherSimulator {
    rng: StdRng,
}

impl WeatherSimulator {
    pub fn new(random_seed: Option<u64>) -> Self {
        let rng = match random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Generate weather for `end_date - day_count ..= end_date`, matching
    /// the inclusive range contract of the consumption series.
    pub fn daily_series(
        &mut self,
        day_count: u32,
        end_date: NaiveDate,
    ) -> Result<Vec<WeatherRecord>, SimulationError> {
        if day_count == 0 {
            return Err(SimulationError::InvalidDayCount);
        }

        let start_date = end_date - Duration::days(i64::from(day_count));

        let records = (0..=i64::from(day_count))
            .map(|offset| {
                let date = start_date + Duration::days(offset);
                self.daily_record(date)
            })
            .collect();

        Ok(records)
    }

    fn daily_record(&mut self, date: NaiveDate) -> WeatherRecord {
        let day_of_year = f64::from(date.ordinal());

        let seasonal_temp = 70.0 + 25.0 * (2.0 * PI * day_of_year / 365.0).sin();
        let temperature = round1(seasonal_temp + self.rng.gen_range(-10.0..=10.0));
        let humidity = round1(self.rng.gen_range(30.0..=80.0));
        let conditions = WeatherCondition::random(&mut self.rng);

        WeatherRecord {
            date,
            temperature,
            humidity,
            conditions,
            heating_degree_days: round1((65.0 - temperature).max(0.0)),
            cooling_degree_days: round1((temperature - 75.0).max(0.0)),
        }
    }
}
