//! Appliance breakdown endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::{ApplianceRecord, HouseholdProfile};
use crate::simulation::{ApplianceSimulator, SimulatorConfig};

#[derive(Debug, Deserialize)]
pub struct BreakdownQuery {
    pub profile: Option<HouseholdProfile>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub profile: HouseholdProfile,
    pub rate_per_kwh: f64,
    pub total_daily_kwh: f64,
    pub appliances: Vec<ApplianceRecord>,
}

/// GET /api/v1/appliances
pub async fn breakdown(
    State(st): State<AppState>,
    Query(q): Query<BreakdownQuery>,
) -> Json<BreakdownResponse> {
    let defaults = &st.config.simulation;
    let profile = q.profile.unwrap_or(defaults.default_profile);
    let rate = st.config.rates.standard;

    let mut simulator = ApplianceSimulator::new(SimulatorConfig {
        profile,
        random_seed: q.seed.or(defaults.random_seed),
    });
    let appliances = simulator.breakdown(rate);
    let total_daily_kwh = appliances.iter().map(|a| a.daily_kwh).sum();

    Json(BreakdownResponse {
        profile,
        rate_per_kwh: rate,
        total_daily_kwh,
        appliances,
    })
}
