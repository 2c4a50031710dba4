use axum::{routing::get, Router};

use crate::api::{appliances, consumption, insights, settings, weather, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/consumption/daily", get(consumption::daily))
        .route("/consumption/hourly", get(consumption::hourly))
        .route("/appliances", get(appliances::breakdown))
        .route("/summary", get(insights::summary))
        .route("/savings/time-of-use", get(insights::time_of_use))
        .route("/weather", get(weather::daily))
        .route("/config", get(settings::show))
        .with_state(state)
}
