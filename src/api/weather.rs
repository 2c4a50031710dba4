//! Weather context endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::api::{error::ApiError, AppState};
use crate::simulation::{WeatherRecord, WeatherSimulator};

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub days: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub days: u32,
    pub records: Vec<WeatherRecord>,
}

/// GET /api/v1/weather
pub async fn daily(
    State(st): State<AppState>,
    Query(q): Query<WeatherQuery>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let defaults = &st.config.simulation;
    let days = q.days.unwrap_or(defaults.default_day_count);

    let mut simulator = WeatherSimulator::new(q.seed.or(defaults.random_seed));
    let records = simulator.daily_series(days, Local::now().date_naive())?;

    Ok(Json(WeatherResponse { days, records }))
}
