//! Comparison of one period's usage against a baseline period.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisError;
use crate::domain::DailySeries;

/// Current-vs-baseline usage comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    pub current_average: f64,
    pub baseline_average: f64,
    /// Current minus baseline average, in kWh per day
    pub difference: f64,
    /// Relative change in percent; 0 when the baseline average is 0
    pub percentage_change: f64,
    /// True when the current period uses less than the baseline
    pub improvement: bool,
}

impl ComparisonMetrics {
    pub fn against_baseline(
        current: &DailySeries,
        baseline: &DailySeries,
    ) -> Result<Self, AnalysisError> {
        if current.is_empty() || baseline.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }

        let current_average =
            current.consumption().sum::<f64>() / current.len() as f64;
        let baseline_average =
            baseline.consumption().sum::<f64>() / baseline.len() as f64;

        let difference = current_average - baseline_average;
        let percentage_change = if baseline_average > 0.0 {
            difference / baseline_average * 100.0
        } else {
            0.0
        };

        Ok(ComparisonMetrics {
            current_average,
            baseline_average,
            difference,
            percentage_change,
            improvement: difference < 0.0,
        })
    }
}
