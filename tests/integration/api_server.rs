//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics and the analysis endpoint.


use serde_json::Value;
use trendlens::core::http::VariantConfigs;
use trendlens::{EngineConfig, EngineError};

use test_utils::{daily_csv, TestApiServer};

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "trendlens-dashboard-api");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    for metric in [
        "http_requests_total",
        "http_request_duration_seconds",
        "http_requests_in_flight",
    ] {
        assert!(body.contains(metric), "Expected {metric} metric");
    }
}

#[tokio::test]
async fn analyze_daily_returns_report() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .add_query_param("variant", "daily")
        .text(daily_csv(60))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["variant"], "daily");
    assert_eq!(body["trend"], "Neutral");
    assert_eq!(body["table"]["bars"].as_array().unwrap().len(), 60);

    let columns = body["columns"].as_array().unwrap();
    let rsi = columns.iter().find(|c| c["name"] == "RSI").unwrap();
    assert_eq!(rsi["kind"], "numeric");
    assert!(rsi["values"][0].is_null());
    assert!(rsi["values"][59].is_number());

    let buy = columns.iter().find(|c| c["name"] == "Buy_Signal").unwrap();
    assert_eq!(buy["kind"], "flag");

    assert_eq!(body["levels"]["support"], 99.0);
    assert_eq!(body["levels"]["resistance"], 160.0);
}

#[tokio::test]
async fn analyze_defaults_to_daily_variant() {
    let app = TestApiServer::new().await;
    let response = app.server.post("/api/analyze").text(daily_csv(10)).await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["variant"], "daily");
}

#[tokio::test]
async fn analyze_intraday_with_custom_timestamp_column() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .add_query_param("variant", "intraday")
        .add_query_param("timestamp_column", "Date")
        .text(daily_csv(40))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["variant"], "intraday");
    assert!(body["trendline"]["slope"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn analyze_missing_column_is_unprocessable() {
    let app = TestApiServer::new().await;
    let csv = "Date,Open,High,Low,Close\n2024-01-02,1,2,0.5,1.5\n";
    let response = app.server.post("/api/analyze").text(csv).expect_failure().await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert_eq!(body["column"], "Volume");
    assert!(body["error"].as_str().unwrap().contains("Volume"));
}

#[tokio::test]
async fn analyze_empty_table_asks_for_other_input() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .text("Date,Open,High,Low,Close,Volume\n")
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("different input"));
}

#[tokio::test]
async fn analyze_unknown_variant_is_bad_request() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .add_query_param("variant", "weekly")
        .text(daily_csv(5))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn analyze_outcomes_are_counted() {
    let app = TestApiServer::new().await;
    let _ = app.server.post("/api/analyze").text(daily_csv(5)).await;
    let _ = app
        .server
        .post("/api/analyze")
        .text("Date,Open\n2024-01-02,1\n")
        .expect_failure()
        .await;

    let ok = app
        .metrics
        .analyses_total
        .with_label_values(&["daily", "ok"])
        .get();
    let invalid = app
        .metrics
        .analyses_total
        .with_label_values(&["daily", "invalid"])
        .get();
    assert_eq!(ok, 1);
    assert_eq!(invalid, 1);

    let body = app.server.get("/metrics").await.text();
    assert!(body.contains("analyses_total"));
}

#[test]
fn variant_configs_reject_invalid_parameters() {
    let mut intraday = EngineConfig::intraday();
    intraday.indicators.ema_short_span = 40;

    let result = VariantConfigs::new(EngineConfig::daily(), intraday);
    assert!(matches!(result, Err(EngineError::InvalidParameter { .. })));
    assert!(VariantConfigs::new(EngineConfig::daily(), EngineConfig::intraday()).is_ok());
}

#[tokio::test]
async fn analyze_with_misconfigured_server_is_internal_error() {
    let mut configs = VariantConfigs::presets();
    configs.daily.indicators.ema_short_span = 40;
    let app = TestApiServer::with_configs(configs).await;

    let response = app
        .server
        .post("/api/analyze")
        .text(daily_csv(5))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    assert!(body["column"].is_null());
    assert!(body["error"].as_str().unwrap().contains("ema_short_span"));
}
