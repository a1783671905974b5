use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::domain::JobPosting;
use super::service::DashboardService;
use super::views::{CandidateProfileView, CandidateStatusView, CandidateView, DashboardMetrics};
use crate::error::AppError;

/// Router builder exposing the read-only dashboard API.
pub fn dashboard_router(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard-data", get(dashboard_data_handler))
        .route("/api/candidates", get(ready_candidates_handler))
        .route("/api/candidate/:name", get(candidate_profile_handler))
        .route("/api/all-candidates", get(all_candidates_handler))
        .route("/api/in-training-candidates", get(in_training_handler))
        .route("/api/offer-pending-candidates", get(offer_pending_handler))
        .route("/api/open-positions", get(open_positions_handler))
        .route("/api/health", get(health_handler))
        .with_state(service)
}

pub(crate) async fn dashboard_data_handler(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<DashboardMetrics>, AppError> {
    Ok(Json(service.metrics().await?))
}

pub(crate) async fn ready_candidates_handler(
    State(service): State<Arc<DashboardService>>,
) -> Json<Vec<CandidateView>> {
    Json(service.ready_for_placement().await)
}

pub(crate) async fn candidate_profile_handler(
    State(service): State<Arc<DashboardService>>,
    Path(name): Path<String>,
) -> Result<Json<CandidateProfileView>, AppError> {
    Ok(Json(service.candidate_profile(&name).await?))
}

pub(crate) async fn all_candidates_handler(
    State(service): State<Arc<DashboardService>>,
) -> Json<Vec<CandidateStatusView>> {
    Json(service.all_candidates().await)
}

pub(crate) async fn in_training_handler(
    State(service): State<Arc<DashboardService>>,
) -> Json<Vec<CandidateView>> {
    Json(service.in_training().await)
}

pub(crate) async fn offer_pending_handler(
    State(service): State<Arc<DashboardService>>,
) -> Json<Vec<CandidateView>> {
    Json(service.offer_pending().await)
}

pub(crate) async fn open_positions_handler(
    State(service): State<Arc<DashboardService>>,
) -> Json<Vec<JobPosting>> {
    Json(service.open_positions().await)
}

pub(crate) async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "MIT Dashboard API is running",
    }))
}
