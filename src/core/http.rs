//! HTTP endpoint server using Axum

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::config::{EngineConfig, Variant};
use crate::data::read_csv;
use crate::error::EngineError;
use crate::metrics::Metrics;
use crate::models::report::AnalysisReport;
use crate::signals::engine::SignalEngine;

pub const SERVICE_NAME: &str = "trendlens-dashboard-api";

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub configs: Arc<VariantConfigs>,
}

impl AppState {
    pub fn new(metrics: Arc<Metrics>, configs: VariantConfigs) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            configs: Arc::new(configs),
        }
    }
}

/// Base configuration per dashboard variant, resolved once at startup.
#[derive(Debug, Clone)]
pub struct VariantConfigs {
    pub daily: EngineConfig,
    pub intraday: EngineConfig,
}

impl VariantConfigs {
    pub fn presets() -> Self {
        Self {
            daily: EngineConfig::daily(),
            intraday: EngineConfig::intraday(),
        }
    }

    /// Build from explicit configurations, rejecting invalid parameters.
    pub fn new(daily: EngineConfig, intraday: EngineConfig) -> Result<Self, EngineError> {
        daily.validate()?;
        intraday.validate()?;
        Ok(Self { daily, intraday })
    }

    /// Presets with environment overrides. A bad override fails here, at
    /// startup, rather than on every request.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::new(
            EngineConfig::from_env(Variant::Daily),
            EngineConfig::from_env(Variant::Intraday),
        )
    }

    pub fn get(&self, variant: Variant) -> &EngineConfig {
        match variant {
            Variant::Daily => &self.daily,
            Variant::Intraday => &self.intraday,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    variant: Option<String>,
    timestamp_column: Option<String>,
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, error: impl Into<String>, column: Option<&str>) -> ApiError {
    (
        status,
        Json(json!({
            "error": error.into(),
            "column": column,
        })),
    )
}

/// Analyze an uploaded CSV table.
///
/// The body is the CSV text; `variant` selects the rule-set (default daily)
/// and `timestamp_column` overrides the variant's timestamp column.
async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeQuery>,
    body: String,
) -> Result<Json<AnalysisReport>, ApiError> {
    let variant = match params.variant.as_deref() {
        Some(raw) => raw
            .parse::<Variant>()
            .map_err(|e| api_error(StatusCode::BAD_REQUEST, e, None))?,
        None => Variant::Daily,
    };

    let mut config = state.configs.get(variant).clone();
    if let Some(column) = params.timestamp_column {
        config = config.with_timestamp_column(column);
    }

    let raw = read_csv(body.as_bytes()).map_err(|e| {
        state.metrics.record_analysis(variant.as_str(), "invalid");
        api_error(StatusCode::BAD_REQUEST, e.to_string(), None)
    })?;
    state.metrics.analysis_rows.observe(raw.row_count() as f64);

    match SignalEngine::analyze(&raw, &config) {
        Ok(report) => {
            state.metrics.record_analysis(variant.as_str(), "ok");
            Ok(Json(report))
        }
        Err(e) => {
            warn!(variant = %variant, error = %e, "Analysis rejected");
            let outcome = match e {
                EngineError::EmptySeries => "empty",
                EngineError::InvalidParameter { .. } => "misconfigured",
                _ => "invalid",
            };
            state.metrics.record_analysis(variant.as_str(), outcome);
            Err(engine_error_response(&e))
        }
    }
}

fn engine_error_response(e: &EngineError) -> ApiError {
    match e {
        EngineError::EmptySeries => api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "the uploaded table has no rows; supply a different input",
            None,
        ),
        EngineError::Csv(_) => api_error(StatusCode::BAD_REQUEST, e.to_string(), None),
        // server-side configuration, not the upload
        EngineError::InvalidParameter { .. } => {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), None)
        }
        _ => api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string(), e.column()),
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/analyze", post(analyze))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let configs = VariantConfigs::from_env()?;
    let state = AppState::new(metrics, configs);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
