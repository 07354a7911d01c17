//! JSON endpoints serving the metrics documents.

use std::time::Instant;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde_json::Value;
use tracing::{debug, error};

use crate::metrics::{LoadOutcome, MetricsRecorder};
use crate::results::{empty_document, MetricsDocument};
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Registers one GET route per metrics document.
pub fn routes() -> Router<AppState> {
    MetricsDocument::ALL
        .into_iter()
        .fold(Router::new(), |router, document| {
            router.route(
                document.route(),
                get(move |State(state): State<AppState>| serve_document(state, document)),
            )
        })
}

/// Returns the document as stored on disk, `{}` when it has not been written yet.
async fn serve_document(
    state: AppState,
    document: MetricsDocument,
) -> Result<Json<Value>, HTTPError> {
    let started = Instant::now();
    let result = state.results.read(document).await;
    state
        .metrics
        .record_document_duration(document.label(), started.elapsed().as_secs_f64());

    match result {
        Ok(Some(value)) => {
            debug!(document = document.label(), "Serving metrics document");
            state
                .metrics
                .record_document_load(document.label(), LoadOutcome::Found);
            Ok(Json(value))
        }
        Ok(None) => {
            state
                .metrics
                .record_document_load(document.label(), LoadOutcome::Missing);
            Ok(Json(empty_document()))
        }
        Err(e) => {
            error!(document = document.label(), "{}", e);
            state
                .metrics
                .record_document_load(document.label(), LoadOutcome::Error);
            Err(e.into())
        }
    }
}
