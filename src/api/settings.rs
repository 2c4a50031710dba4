//! Configuration vocabulary endpoint, used by front-ends to populate
//! profile and energy-source selectors.

use axum::{extract::State, Json};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::api::AppState;
use crate::config::EnergyRates;
use crate::domain::{EnergySource, HouseholdProfile};

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub rates: EnergyRates,
    pub carbon_emission_factor: f64,
    pub household_profiles: Vec<String>,
    pub energy_sources: Vec<String>,
}

/// GET /api/v1/config
pub async fn show(State(st): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        rates: st.config.rates.clone(),
        carbon_emission_factor: st.config.carbon.emission_factor_lbs_per_kwh,
        household_profiles: HouseholdProfile::iter().map(|p| p.to_string()).collect(),
        energy_sources: EnergySource::iter().map(|s| s.to_string()).collect(),
    })
}
