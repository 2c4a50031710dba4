//! Consumption series endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::{error::ApiError, AppState};
use crate::domain::{DailySeries, HourlyProfile, HouseholdProfile};
use crate::simulation::{ConsumptionSimulator, SimulatorConfig};

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    pub days: Option<u32>,
    pub profile: Option<HouseholdProfile>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct DailyResponse {
    pub profile: HouseholdProfile,
    pub days: u32,
    pub series: DailySeries,
}

/// GET /api/v1/consumption/daily
pub async fn daily(
    State(st): State<AppState>,
    Query(q): Query<DailyQuery>,
) -> Result<Json<DailyResponse>, ApiError> {
    let defaults = &st.config.simulation;
    let profile = q.profile.unwrap_or(defaults.default_profile);
    let days = q.days.unwrap_or(defaults.default_day_count);

    let mut simulator = ConsumptionSimulator::new(SimulatorConfig {
        profile,
        random_seed: q.seed.or(defaults.random_seed),
    });
    let series = simulator.daily_series(days, Local::now().date_naive())?;

    Ok(Json(DailyResponse {
        profile,
        days,
        series,
    }))
}

#[derive(Debug, Deserialize)]
pub struct HourlyQuery {
    /// Date to profile; defaults to today
    pub date: Option<NaiveDate>,
    pub profile: Option<HouseholdProfile>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct HourlyResponse {
    pub profile: HouseholdProfile,
    pub hourly: HourlyProfile,
}

/// GET /api/v1/consumption/hourly
pub async fn hourly(
    State(st): State<AppState>,
    Query(q): Query<HourlyQuery>,
) -> Json<HourlyResponse> {
    let defaults = &st.config.simulation;
    let profile = q.profile.unwrap_or(defaults.default_profile);
    let date = q.date.unwrap_or_else(|| Local::now().date_naive());

    let mut simulator = ConsumptionSimulator::new(SimulatorConfig {
        profile,
        random_seed: q.seed.or(defaults.random_seed),
    });

    Json(HourlyResponse {
        profile,
        hourly: simulator.hourly_profile(date),
    })
}
