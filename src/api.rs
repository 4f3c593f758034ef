//! Dashboard HTTP API

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::{
    alerts::{Alert, AlertBoard, Recommendation, SeverityFilter},
    cases::{CaseReport, RiskSlice, risk_distribution},
    refresh::DashboardState,
    render::DashboardView,
};

/// Shared state behind every API handler
pub struct AppState {
    pub dashboard: Arc<DashboardState>,
    pub alerts: RwLock<AlertBoard>,
    pub cases: Vec<CaseReport>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/advisory", get(get_advisory))
        .route("/location", post(set_location))
        .route("/cases", get(get_cases))
        .route("/risk-summary", get(get_risk_summary))
        .route("/alerts", get(get_alerts))
        .route("/alerts/{id}", get(get_alert))
        .route("/alerts/guidance/{city}", put(put_city_guidance))
        .with_state(state)
}

async fn get_advisory(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(state.dashboard.view().await)
}

#[derive(Debug, Deserialize)]
struct LocationChange {
    location: String,
}

async fn set_location(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LocationChange>,
) -> Result<StatusCode, StatusCode> {
    state
        .dashboard
        .set_location(&payload.location)
        .await
        .map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
    Ok(StatusCode::OK)
}

async fn get_cases(State(state): State<Arc<AppState>>) -> Json<Vec<CaseReport>> {
    Json(state.cases.clone())
}

async fn get_risk_summary(State(state): State<Arc<AppState>>) -> Json<Vec<RiskSlice>> {
    Json(risk_distribution(&state.cases))
}

#[derive(Debug, Deserialize)]
struct AlertsQuery {
    severity: Option<String>,
}

async fn get_alerts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AlertsQuery>,
) -> Result<Json<Vec<Alert>>, StatusCode> {
    let filter = match query.severity.as_deref() {
        None => SeverityFilter::All,
        Some(raw) => raw.parse().map_err(|_| StatusCode::BAD_REQUEST)?,
    };

    let board = state.alerts.read().await;
    Ok(Json(board.filtered(filter).into_iter().cloned().collect()))
}

async fn get_alert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Alert>, StatusCode> {
    let board = state.alerts.read().await;
    board.by_id(id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn put_city_guidance(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
    Json(recommendation): Json<Recommendation>,
) -> StatusCode {
    let mut board = state.alerts.write().await;
    board.update_city_guidance(&city, recommendation);
    StatusCode::OK
}
