//! Shared application state.
//!
//! Everything a handler needs is injected here at startup; there are no
//! process-wide globals.

use crate::metrics::Metrics;
use crate::results::ResultsDir;
use crate::templates::IndexPage;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Directory the metrics documents are read from on every request.
    pub results: ResultsDir,
    /// Dashboard template served on `/`.
    pub index: Arc<IndexPage>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(results: ResultsDir, index: IndexPage) -> Self {
        AppState {
            results,
            index: Arc::new(index),
            metrics: Metrics::new(),
        }
    }
}
