//! HTTP surface tests: every endpoint is exercised through the full router
//! with `tower::ServiceExt::oneshot`, no running server required.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use home_energy_insights::api::{self, AppState};
use home_energy_insights::config::Config;

fn test_app() -> Router {
    let cfg = Config::default();
    api::router(AppState::new(cfg.clone()), &cfg)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn health_endpoints_respond() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = get("/health/live").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn daily_series_has_inclusive_day_count() {
    let (status, body) = get("/api/v1/consumption/daily?days=30&seed=42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 30);
    assert_eq!(body["profile"], "Medium House");

    let series = body["series"].as_array().unwrap();
    assert_eq!(series.len(), 31);
    for record in series {
        assert!(record["consumption"].as_f64().unwrap() > 0.0);
    }
}

#[tokio::test]
async fn daily_series_rejects_zero_days() {
    let (status, body) = get("/api/v1/consumption/daily?days=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn daily_series_rejects_unknown_profile() {
    let (status, _) = get("/api/v1/consumption/daily?profile=Castle").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn daily_series_honors_profile_parameter() {
    let (status, body) =
        get("/api/v1/consumption/daily?days=7&seed=1&profile=Small%20Apartment").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"], "Small Apartment");
    assert_eq!(body["series"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn daily_series_is_reproducible_with_seed() {
    let (_, first) = get("/api/v1/consumption/daily?days=14&seed=99").await;
    let (_, second) = get("/api/v1/consumption/daily?days=14&seed=99").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn hourly_profile_has_24_records() {
    let (status, body) = get("/api/v1/consumption/hourly?date=2024-06-15&seed=42").await;
    assert_eq!(status, StatusCode::OK);

    let records = body["hourly"]["records"].as_array().unwrap();
    assert_eq!(records.len(), 24);
    assert_eq!(records[0]["time"], "00:00");
    assert_eq!(records[23]["hour"], 23);
}

#[tokio::test]
async fn appliance_percentages_sum_to_100() {
    let (status, body) = get("/api/v1/appliances?profile=Mansion&seed=7").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["appliances"].as_array().unwrap();
    assert_eq!(rows.len(), 10);

    let sum: f64 = rows
        .iter()
        .map(|r| r["percentage"].as_f64().unwrap())
        .sum();
    assert!((sum - 100.0).abs() <= 0.1, "percentages summed to {sum}");
}

#[tokio::test]
async fn summary_reports_all_metric_groups() {
    let (status, body) = get("/api/v1/summary?days=30&seed=42").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body["summary"]["total_consumption"].as_f64().unwrap() > 0.0);
    assert!(body["summary"]["peak_day"]["consumption"].as_f64().unwrap() > 0.0);
    assert!(body["costs"]["monthly_projection"].as_f64().unwrap() > 0.0);
    assert!(body["carbon_lbs"].as_f64().unwrap() > 0.0);

    let score = body["efficiency"]["score"].as_u64().unwrap();
    assert!((40..=95).contains(&score));

    // 30 days of data is enough for a trend direction
    let trend = body["summary"]["trend"].as_str().unwrap();
    assert!(trend == "increasing" || trend == "decreasing");
}

#[tokio::test]
async fn time_of_use_partitions_every_hour() {
    let (status, body) = get("/api/v1/savings/time-of-use?date=2024-06-15&seed=42").await;
    assert_eq!(status, StatusCode::OK);

    let analysis = &body["analysis"];
    let peak = analysis["peak_usage_kwh"].as_f64().unwrap();
    let off_peak = analysis["off_peak_usage_kwh"].as_f64().unwrap();
    assert!(peak > 0.0);
    assert!(off_peak > 0.0);

    let flat = analysis["flat_rate_cost"].as_f64().unwrap();
    let tou = analysis["tou_cost"].as_f64().unwrap();
    let savings = analysis["savings"].as_f64().unwrap();
    assert!((savings - (flat - tou)).abs() < 1e-9);
}

#[tokio::test]
async fn weather_series_matches_day_count() {
    let (status, body) = get("/api/v1/weather?days=14&seed=3").await;
    assert_eq!(status, StatusCode::OK);

    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 15);
    for record in records {
        assert!(record["humidity"].as_f64().unwrap() >= 30.0);
    }
}

#[tokio::test]
async fn config_endpoint_exposes_vocabularies() {
    let (status, body) = get("/api/v1/config").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["rates"]["standard"], 0.12);
    assert_eq!(body["carbon_emission_factor"], 0.92);

    let profiles = body["household_profiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 4);
    assert!(profiles.iter().any(|p| p == "Medium House"));

    let sources = body["energy_sources"].as_array().unwrap();
    assert_eq!(sources.len(), 4);
    assert!(sources.iter().any(|s| s == "Solar + Grid"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = get("/api/v1/nonsense").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
