//! Dashboard page.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{routing::get, Router};
use tracing::error;

use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, HTTPError> {
    state.index.render().map(Html).map_err(|e| {
        error!("Failed to render index page: {}", e);
        HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, "failed to render index page")
    })
}
