//! Cost projections, time-of-use comparisons, savings potential, and the
//! carbon footprint conversion.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisError;
use crate::config::EnergyRates;
use crate::domain::{DailySeries, HourlyProfile};

/// Peak-hour schedule: morning rush and evening peak, both inclusive
const MORNING_PEAK_HOURS: std::ops::RangeInclusive<u32> = 7..=9;
const EVENING_PEAK_HOURS: std::ops::RangeInclusive<u32> = 17..=21;

/// US grid average, in lbs CO2 per kWh
pub const DEFAULT_EMISSION_FACTOR: f64 = 0.92;

/// Whether an hour falls in the peak-rate schedule
pub fn is_peak_hour(hour: u32) -> bool {
    MORNING_PEAK_HOURS.contains(&hour) || EVENING_PEAK_HOURS.contains(&hour)
}

/// CO2 emissions for a quantity of energy, in pounds
pub fn carbon_footprint_lbs(kwh: f64, emission_factor: f64) -> f64 {
    kwh * emission_factor
}

/// Flat-rate cost figures extrapolated from a daily series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostProjection {
    pub rate_per_kwh: f64,
    /// Average cost per day over the covered period
    pub daily_average: f64,
    /// Cost of the covered period
    pub period_total: f64,
    /// Period cost scaled to a 30-day month
    pub monthly_projection: f64,
    /// Twelve months of the monthly projection
    pub yearly_projection: f64,
}

impl CostProjection {
    pub fn from_series(series: &DailySeries, rate_per_kwh: f64) -> Result<Self, AnalysisError> {
        if series.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }

        let days = series.len() as f64;
        let period_total: f64 = series.consumption().sum::<f64>() * rate_per_kwh;
        let monthly_projection = period_total * 30.0 / days;

        Ok(CostProjection {
            rate_per_kwh,
            daily_average: period_total / days,
            period_total,
            monthly_projection,
            yearly_projection: monthly_projection * 12.0,
        })
    }
}

/// Time-of-use rate comparison against a flat-rate baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOfUseAnalysis {
    pub flat_rate_cost: f64,
    pub tou_cost: f64,
    /// Flat-rate cost minus time-of-use cost (negative when TOU loses)
    pub savings: f64,
    /// Savings relative to the flat-rate cost; 0 when that cost is 0
    pub savings_percentage: f64,
    pub peak_usage_kwh: f64,
    pub off_peak_usage_kwh: f64,
}

impl TimeOfUseAnalysis {
    /// Partition an hourly profile into peak and off-peak usage and cost
    /// each partition at its rate.
    pub fn from_profile(profile: &HourlyProfile, rates: &EnergyRates) -> Self {
        let mut peak_usage_kwh = 0.0;
        let mut off_peak_usage_kwh = 0.0;

        for record in &profile.records {
            if is_peak_hour(record.hour) {
                peak_usage_kwh += record.consumption;
            } else {
                off_peak_usage_kwh += record.consumption;
            }
        }

        let total_kwh = peak_usage_kwh + off_peak_usage_kwh;
        let flat_rate_cost = total_kwh * rates.standard;
        let tou_cost = peak_usage_kwh * rates.peak + off_peak_usage_kwh * rates.off_peak;
        let savings = flat_rate_cost - tou_cost;
        let savings_percentage = if flat_rate_cost > 0.0 {
            savings / flat_rate_cost * 100.0
        } else {
            0.0
        };

        TimeOfUseAnalysis {
            flat_rate_cost,
            tou_cost,
            savings,
            savings_percentage,
            peak_usage_kwh,
            off_peak_usage_kwh,
        }
    }
}

/// What moving to a target efficiency level would save
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsPotential {
    pub target_usage_kwh: f64,
    pub savings_kwh: f64,
    pub savings_cost: f64,
    /// Share of current usage that would be saved; 0 for zero usage
    pub percentage: f64,
}

impl SavingsPotential {
    pub fn from_usage(current_kwh: f64, target_ratio: f64, rate_per_kwh: f64) -> Self {
        let target_usage_kwh = current_kwh * target_ratio;
        let savings_kwh = current_kwh - target_usage_kwh;
        let percentage = if current_kwh > 0.0 {
            savings_kwh / current_kwh * 100.0
        } else {
            0.0
        };

        SavingsPotential {
            target_usage_kwh,
            savings_kwh,
            savings_cost: savings_kwh * rate_per_kwh,
            percentage,
        }
    }
}
