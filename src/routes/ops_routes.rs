//! Operational endpoints: liveness and Prometheus exposition.
//!
//! Neither touches the results directory, so they answer the same way whether
//! or not any benchmark has been written yet.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{routing::get, Router};
use tracing::error;

use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
}

async fn health() -> &'static str {
    "OK"
}

async fn prometheus_metrics(State(state): State<AppState>) -> Result<impl IntoResponse, HTTPError> {
    let exposition = state.metrics.render().map_err(|e| {
        error!("Failed to encode metrics: {}", e);
        HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics")
    })?;

    Ok(([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], exposition))
}
