//! # Metrics Endpoint

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::middleware::metrics::MetricsSnapshot;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/metrics", get(metrics))
}

/// GET /v1/metrics — Current request and validation counters.
#[utoipa::path(
    get,
    path = "/v1/metrics",
    responses(
        (status = 200, description = "Counter snapshot", body = MetricsSnapshot),
    ),
    tag = "metrics"
)]
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
