//! Record and series types exchanged between the generators, the analysis
//! functions, and presentation collaborators.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::EfficiencyClass;

/// Season bucket derived from the calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Fixed month-to-season table: Dec-Feb, Mar-May, Jun-Aug, Sep-Nov
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Fall,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }
}

/// Time-of-day bucket attached to hourly records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum TimePeriod {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl TimePeriod {
    /// Fixed hour ranges: 05-11 Morning, 12-16 Afternoon, 17-21 Evening
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimePeriod::Morning,
            12..=16 => TimePeriod::Afternoon,
            17..=21 => TimePeriod::Evening,
            _ => TimePeriod::Night,
        }
    }
}

/// One synthesized day of household consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Consumption in kWh, rounded to 2 decimal places, always positive
    pub consumption: f64,
    pub weekday: String,
    pub month: String,
    pub season: Season,
}

impl DailyRecord {
    /// Build a record, deriving the calendar labels from the date
    pub fn new(date: NaiveDate, consumption: f64) -> Self {
        Self {
            date,
            consumption,
            weekday: date.format("%A").to_string(),
            month: date.format("%B").to_string(),
            season: Season::from_date(date),
        }
    }
}

/// Ordered, gapless sequence of daily records.
///
/// Generators uphold the invariants (dates strictly ascending by one day,
/// positive consumption); analysis code treats the series as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailySeries(Vec<DailyRecord>);

impl DailySeries {
    pub fn from_records(records: Vec<DailyRecord>) -> Self {
        debug_assert!(
            records
                .windows(2)
                .all(|w| w[1].date == w[0].date + chrono::Duration::days(1)),
            "daily series must be gapless and strictly ascending"
        );
        Self(records)
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.0.iter()
    }

    /// Consumption values in date order
    pub fn consumption(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|r| r.consumption)
    }

    pub fn first(&self) -> Option<&DailyRecord> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&DailyRecord> {
        self.0.last()
    }

    /// Copy of the series with extreme outliers removed (more than five
    /// standard deviations above the mean). Negative values cannot occur by
    /// construction but are filtered all the same.
    pub fn without_outliers(&self) -> DailySeries {
        if self.0.is_empty() {
            return self.clone();
        }
        let n = self.0.len() as f64;
        let mean = self.consumption().sum::<f64>() / n;
        let variance = self.consumption().map(|c| (c - mean).powi(2)).sum::<f64>() / n;
        let upper = mean + 5.0 * variance.sqrt();

        DailySeries(
            self.0
                .iter()
                .filter(|r| r.consumption >= 0.0 && r.consumption <= upper)
                .cloned()
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a DailySeries {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One synthesized hour of household consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Consumption in kWh, rounded to 3 decimal places
    pub consumption: f64,
    /// Display label, "HH:00"
    pub time: String,
    pub period: TimePeriod,
}

/// Exactly 24 hourly records for a single date, hour equal to index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyProfile {
    pub date: NaiveDate,
    pub records: Vec<HourlyRecord>,
}

impl HourlyProfile {
    pub fn total_kwh(&self) -> f64 {
        self.records.iter().map(|r| r.consumption).sum()
    }
}

/// One synthesized appliance breakdown row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplianceRecord {
    pub appliance: String,
    pub daily_kwh: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub efficiency_rating: EfficiencyClass,
    /// Share of the breakdown total, in percent; rows of one breakdown sum
    /// to 100 within rounding tolerance
    pub percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_table() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(9), Season::Fall);
        assert_eq!(Season::from_month(11), Season::Fall);
    }

    #[test]
    fn test_time_period_ranges() {
        assert_eq!(TimePeriod::from_hour(0), TimePeriod::Night);
        assert_eq!(TimePeriod::from_hour(4), TimePeriod::Night);
        assert_eq!(TimePeriod::from_hour(5), TimePeriod::Morning);
        assert_eq!(TimePeriod::from_hour(11), TimePeriod::Morning);
        assert_eq!(TimePeriod::from_hour(12), TimePeriod::Afternoon);
        assert_eq!(TimePeriod::from_hour(16), TimePeriod::Afternoon);
        assert_eq!(TimePeriod::from_hour(17), TimePeriod::Evening);
        assert_eq!(TimePeriod::from_hour(21), TimePeriod::Evening);
        assert_eq!(TimePeriod::from_hour(22), TimePeriod::Night);
        assert_eq!(TimePeriod::from_hour(23), TimePeriod::Night);
    }

    #[test]
    fn test_daily_record_derives_labels() {
        // 2024-06-15 was a Saturday
        let record = DailyRecord::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), 25.5);
        assert_eq!(record.weekday, "Saturday");
        assert_eq!(record.month, "June");
        assert_eq!(record.season, Season::Summer);
    }

    #[test]
    fn test_outlier_filtering() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut records: Vec<DailyRecord> = (0..40)
            .map(|i| DailyRecord::new(start + chrono::Duration::days(i), 20.0))
            .collect();
        // One absurd spike well past five standard deviations
        records[10].consumption = 100_000.0;

        let series = DailySeries::from_records(records);
        let cleaned = series.without_outliers();
        assert_eq!(cleaned.len(), 39);
        assert!(cleaned.consumption().all(|c| c < 100.0));
    }
}
