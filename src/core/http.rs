//! HTTP endpoint server using Axum

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::UpstreamConfig;
use crate::hazards::{
    heat_index_info, parse_readings_from_map, parse_weather_from_map, try_aggregate,
    try_heat_index_info, HazardError, HazardReport,
};
use crate::metrics::Metrics;
use crate::models::{AirQualityResult, HeatIndexResult, PollutantReadings};
use crate::services::{AirQualitySummary, HazardService, HeatSummary, ServiceError};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub hazards: Arc<HazardService>,
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

/// Error response rendered as `{"error": "..."}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<HazardError> for ApiError {
    fn from(err: HazardError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::LocationNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

fn upstream_failure(state: &AppState, source: &str, err: ServiceError) -> ApiError {
    if !matches!(err, ServiceError::LocationNotFound(_)) {
        state.metrics.record_upstream_error(source);
    }
    error!(error = %err, source = source, "Upstream request failed");
    err.into()
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "envguard-hazard-engine"
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
        error!(
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
struct LocationQuery {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CityQuery {
    city: String,
    #[serde(default)]
    format: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HeatIndexRequest {
    temperature: f64,
    humidity: f64,
}

/// Current air quality index plus hourly pollutant series
async fn air_quality_stats(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<AirQualitySummary>, ApiError> {
    let coordinates = state
        .hazards
        .resolve_coordinates(params.latitude, params.longitude)
        .await;

    let summary = state
        .hazards
        .air_quality_summary(coordinates)
        .await
        .map_err(|e| upstream_failure(&state, "air_quality", e))?;

    state.metrics.record_evaluation("air_quality");
    Ok(Json(summary))
}

/// Current heat index plus hourly weather and heat-index series
async fn heat_data(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<HeatSummary>, ApiError> {
    let coordinates = state
        .hazards
        .resolve_coordinates(params.latitude, params.longitude)
        .await;

    let summary = state
        .hazards
        .heat_summary(coordinates)
        .await
        .map_err(|e| upstream_failure(&state, "weather", e))?;

    state.metrics.record_evaluation("heat_index");
    Ok(Json(summary))
}

/// Combined report for a city; `format=text` returns the plain-text rendering
async fn city_hazards(
    State(state): State<AppState>,
    Query(params): Query<CityQuery>,
) -> Result<Response, ApiError> {
    let report: HazardReport = state
        .hazards
        .city_report(&params.city)
        .await
        .map_err(|e| upstream_failure(&state, "hazard_report", e))?;

    state.metrics.record_evaluation("hazard_report");
    if report.has_hazards() {
        warn!(city = %params.city, "Environmental hazards detected");
    }

    match params.format.as_deref() {
        Some("text") => Ok(report.render_text().into_response()),
        _ => Ok(Json(report).into_response()),
    }
}

/// Compute an AQI from caller-supplied concentrations
async fn compute_aqi(
    State(state): State<AppState>,
    Json(readings): Json<PollutantReadings>,
) -> Result<Json<AirQualityResult>, ApiError> {
    let result = try_aggregate(&readings)?;
    state.metrics.record_evaluation("air_quality");
    Ok(Json(result))
}

/// Query-string variant: `GET /api/aqi?pm25=40&o3=30`
async fn compute_aqi_from_query(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<AirQualityResult>, ApiError> {
    let readings = parse_readings_from_map(&params)?;
    let result = try_aggregate(&readings)?;
    state.metrics.record_evaluation("air_quality");
    Ok(Json(result))
}

/// Query-string variant: `GET /api/heat-index?temperature=35&humidity=70`
async fn compute_heat_index_from_query(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<HeatIndexResult>, ApiError> {
    let (temperature, humidity) = parse_weather_from_map(&params)?;
    let result = heat_index_info(temperature, humidity);
    state.metrics.record_evaluation("heat_index");
    Ok(Json(result))
}

/// Compute a heat index from caller-supplied temperature and humidity
async fn compute_heat_index(
    State(state): State<AppState>,
    Json(request): Json<HeatIndexRequest>,
) -> Result<Json<HeatIndexResult>, ApiError> {
    let result = try_heat_index_info(request.temperature, request.humidity)?;
    state.metrics.record_evaluation("heat_index");
    Ok(Json(result))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/stats", get(air_quality_stats))
        .route("/api/heat-data", get(heat_data))
        .route("/api/hazards", get(city_hazards))
        .route("/api/aqi", get(compute_aqi_from_query).post(compute_aqi))
        .route(
            "/api/heat-index",
            get(compute_heat_index_from_query).post(compute_heat_index),
        )
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

pub async fn start_server(port: u16, config: UpstreamConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let metrics = Arc::new(Metrics::new()?);
    let hazards = Arc::new(HazardService::from_config(&config)?);

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        hazards,
    };
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
