//! Summary and savings endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::analysis::{
    carbon_footprint_lbs, CostProjection, EfficiencyRating, SavingsPotential, TimeOfUseAnalysis,
    UsageSummary,
};
use crate::api::{error::ApiError, AppState};
use crate::domain::HouseholdProfile;
use crate::simulation::{ConsumptionSimulator, SimulatorConfig};

/// Efficiency target assumed for the savings-potential figure
const EFFICIENT_USAGE_TARGET: f64 = 0.8;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub days: Option<u32>,
    pub profile: Option<HouseholdProfile>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub profile: HouseholdProfile,
    pub days: u32,
    pub summary: UsageSummary,
    pub costs: CostProjection,
    /// CO2 emissions of the covered period, in pounds
    pub carbon_lbs: f64,
    /// Average daily consumption rated against the profile baseline
    pub efficiency: EfficiencyRating,
    pub savings_potential: SavingsPotential,
}

/// GET /api/v1/summary
pub async fn summary(
    State(st): State<AppState>,
    Query(q): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let defaults = &st.config.simulation;
    let profile = q.profile.unwrap_or(defaults.default_profile);
    let days = q.days.unwrap_or(defaults.default_day_count);
    let rates = &st.config.rates;

    let mut simulator = ConsumptionSimulator::new(SimulatorConfig {
        profile,
        random_seed: q.seed.or(defaults.random_seed),
    });
    let series = simulator.daily_series(days, Local::now().date_naive())?;

    let summary = UsageSummary::from_series(&series)?;
    let costs = CostProjection::from_series(&series, rates.standard)?;
    let carbon_lbs = carbon_footprint_lbs(
        summary.total_consumption,
        st.config.carbon.emission_factor_lbs_per_kwh,
    );
    let efficiency =
        EfficiencyRating::from_consumption(summary.average_daily, profile.base_daily_kwh());
    let savings_potential = SavingsPotential::from_usage(
        summary.average_daily,
        EFFICIENT_USAGE_TARGET,
        rates.standard,
    );

    Ok(Json(SummaryResponse {
        profile,
        days,
        summary,
        costs,
        carbon_lbs,
        efficiency,
        savings_potential,
    }))
}

#[derive(Debug, Deserialize)]
pub struct TimeOfUseQuery {
    pub date: Option<NaiveDate>,
    pub profile: Option<HouseholdProfile>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct TimeOfUseResponse {
    pub profile: HouseholdProfile,
    pub date: NaiveDate,
    pub analysis: TimeOfUseAnalysis,
}

/// GET /api/v1/savings/time-of-use
pub async fn time_of_use(
    State(st): State<AppState>,
    Query(q): Query<TimeOfUseQuery>,
) -> Json<TimeOfUseResponse> {
    let defaults = &st.config.simulation;
    let profile = q.profile.unwrap_or(defaults.default_profile);
    let date = q.date.unwrap_or_else(|| Local::now().date_naive());

    let mut simulator = ConsumptionSimulator::new(SimulatorConfig {
        profile,
        random_seed: q.seed.or(defaults.random_seed),
    });
    let hourly = simulator.hourly_profile(date);
    let analysis = TimeOfUseAnalysis::from_profile(&hourly, &st.config.rates);

    Json(TimeOfUseResponse {
        profile,
        date,
        analysis,
    })
}
