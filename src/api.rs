//! # HTTP Ingress
//! Axum router for the prediction endpoint plus health and debug routes.
//! The ingress owns all coercion and error shaping; the engine itself is
//! total and never fails. Error responses use a disjoint `{"error": ...}`
//! shape so clients can never mistake one for an assessment.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use metrics::counter;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::assessment::RiskAssessment;
use crate::engine;
use crate::features::PatientFeatures;
use crate::history::AssessmentLog;

#[derive(Clone)]
pub struct AppState {
    history: Arc<AssessmentLog>,
}

impl AppState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: Arc::new(AssessmentLog::with_capacity(history_capacity)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(2000)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/predict", post(predict))
        .route("/debug/history", get(debug_history))
        .route("/debug/last-assessment", get(debug_last_assessment))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Error kind returned to callers; never conflated with an assessment.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RiskAssessment>, ApiError> {
    let Json(body) = payload.map_err(|rej| ApiError::bad_request(rej.body_text()))?;

    let features = PatientFeatures::from_json(&body);
    debug!(?features, "processing patient record");

    let assessment = engine::assess(&features);
    counter!("predict_requests_total").increment(1);
    state.history.push(&assessment);

    info!(
        prediction = assessment.prediction,
        probability = assessment.probability,
        category = %assessment.risk_category,
        "assessment complete"
    );

    Ok(Json(assessment))
}

#[derive(serde::Serialize)]
struct HistoryOut {
    ts: String,
    prediction: u8,
    probability: f64,
    risk_score: f64,
    category: &'static str,
}

impl From<crate::history::HistoryEntry> for HistoryOut {
    fn from(h: crate::history::HistoryEntry) -> Self {
        Self {
            ts: h.ts,
            prediction: h.prediction,
            probability: h.probability,
            risk_score: h.risk_score,
            category: h.category,
        }
    }
}

async fn debug_history(State(state): State<AppState>) -> Json<Vec<HistoryOut>> {
    let rows = state.history.snapshot_last_n(10);
    Json(rows.into_iter().map(HistoryOut::from).collect())
}

async fn debug_last_assessment(State(state): State<AppState>) -> Json<Option<HistoryOut>> {
    let mut rows = state.history.snapshot_last_n(1);
    Json(rows.pop().map(HistoryOut::from))
}
