//! HTTP route definitions and handlers.
//!
//! The routing table is explicit: the dashboard page, one JSON route per
//! metrics document, and the operational health and metrics endpoints.

mod api_routes;
mod index_routes;
mod ops_routes;

use crate::state::AppState;
use axum::Router;

/// Creates the application router with all configured routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(index_routes::routes())
        .merge(api_routes::routes())
        .merge(ops_routes::routes())
        .with_state(state)
}
