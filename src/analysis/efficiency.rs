//! Efficiency rating of observed consumption against a profile baseline.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Ordered rating bands with fixed inclusive ratio thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum EfficiencyBand {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Below Average")]
    #[strum(serialize = "Below Average")]
    BelowAverage,
    Poor,
}

impl EfficiencyBand {
    /// Band for a consumption/baseline ratio. Thresholds are inclusive:
    /// exactly 0.70 is still Excellent, exactly 1.20 still Below Average.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 0.70 {
            EfficiencyBand::Excellent
        } else if ratio <= 0.85 {
            EfficiencyBand::Good
        } else if ratio <= 1.00 {
            EfficiencyBand::Average
        } else if ratio <= 1.20 {
            EfficiencyBand::BelowAverage
        } else {
            EfficiencyBand::Poor
        }
    }

    /// Fixed numeric score for display gauges
    pub fn score(&self) -> u8 {
        match self {
            EfficiencyBand::Excellent => 95,
            EfficiencyBand::Good => 85,
            EfficiencyBand::Average => 75,
            EfficiencyBand::BelowAverage => 60,
            EfficiencyBand::Poor => 40,
        }
    }

    /// Display color hex code
    pub fn color(&self) -> &'static str {
        match self {
            EfficiencyBand::Excellent => "#28a745",
            EfficiencyBand::Good => "#20c997",
            EfficiencyBand::Average => "#ffc107",
            EfficiencyBand::BelowAverage => "#fd7e14",
            EfficiencyBand::Poor => "#dc3545",
        }
    }
}

/// Rating snapshot handed to metric-display code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencyRating {
    /// Consumption relative to the baseline (1.0 = exactly at baseline)
    pub ratio: f64,
    pub rating: EfficiencyBand,
    pub score: u8,
    pub color: String,
}

impl EfficiencyRating {
    /// Rate consumption against a baseline. A zero (or negative) baseline
    /// cannot be compared against, so the ratio is pinned to 1.0 rather
    /// than dividing by zero.
    pub fn from_consumption(consumption: f64, baseline: f64) -> Self {
        let ratio = if baseline > 0.0 {
            consumption / baseline
        } else {
            1.0
        };
        let band = EfficiencyBand::from_ratio(ratio);

        EfficiencyRating {
            ratio,
            rating: band,
            score: band.score(),
            color: band.color().to_string(),
        }
    }
}
