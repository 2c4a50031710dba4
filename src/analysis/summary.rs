//! Summary statistics over a daily consumption series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisError;
use crate::domain::{DailyRecord, DailySeries};

/// Sub-window length for the trend comparison
const TREND_WINDOW: usize = 7;

/// Standard deviation above this fraction of the mean reads as "high"
const VARIABILITY_THRESHOLD: f64 = 0.3;

/// Direction of the early-vs-late sub-window comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Decreasing,
    /// Fewer than seven records; no direction is reported
    InsufficientData,
}

/// Dispersion classification relative to the mean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variability {
    High,
    Low,
}

/// Date and consumption of an extreme day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayExtreme {
    pub date: NaiveDate,
    pub consumption: f64,
}

impl From<&DailyRecord> for DayExtreme {
    fn from(record: &DailyRecord) -> Self {
        Self {
            date: record.date,
            consumption: record.consumption,
        }
    }
}

/// Read-only snapshot of aggregate statistics for one series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageSummary {
    pub total_consumption: f64,
    pub average_daily: f64,
    pub peak_day: DayExtreme,
    pub low_day: DayExtreme,
    pub trend: Trend,
    /// Magnitude of the early-vs-late change in percent; 0 when the trend
    /// cannot be computed
    pub trend_percentage: f64,
    pub standard_deviation: f64,
    pub variability: Variability,
}

impl UsageSummary {
    /// Compute the summary for a series.
    ///
    /// Ties for peak or low day go to the first occurrence in date order.
    /// The trend compares the mean of the first `min(7, len/2)` records
    /// against the last `min(7, len/2)`; series shorter than seven records
    /// report `InsufficientData`.
    pub fn from_series(series: &DailySeries) -> Result<Self, AnalysisError> {
        let records = series.records();
        if records.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }

        let n = records.len() as f64;
        let total_consumption: f64 = series.consumption().sum();
        let average_daily = total_consumption / n;

        let mut peak = &records[0];
        let mut low = &records[0];
        for record in &records[1..] {
            if record.consumption > peak.consumption {
                peak = record;
            }
            if record.consumption < low.consumption {
                low = record;
            }
        }

        let variance = series
            .consumption()
            .map(|c| (c - average_daily).powi(2))
            .sum::<f64>()
            / n;
        let standard_deviation = variance.sqrt();

        let (trend, trend_percentage) = if records.len() < TREND_WINDOW {
            (Trend::InsufficientData, 0.0)
        } else {
            let window = TREND_WINDOW.min(records.len() / 2);
            let older: f64 = records[..window]
                .iter()
                .map(|r| r.consumption)
                .sum::<f64>()
                / window as f64;
            let recent: f64 = records[records.len() - window..]
                .iter()
                .map(|r| r.consumption)
                .sum::<f64>()
                / window as f64;

            let trend = if recent > older {
                Trend::Increasing
            } else {
                Trend::Decreasing
            };
            let percentage = if older > 0.0 {
                ((recent - older) / older * 100.0).abs()
            } else {
                0.0
            };
            (trend, percentage)
        };

        let variability = if standard_deviation > average_daily * VARIABILITY_THRESHOLD {
            Variability::High
        } else {
            Variability::Low
        };

        Ok(UsageSummary {
            total_consumption,
            average_daily,
            peak_day: peak.into(),
            low_day: low.into(),
            trend,
            trend_percentage,
            standard_deviation,
            variability,
        })
    }
}
