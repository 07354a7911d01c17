//! Application startup and server initialization.
//!
//! Loads the dashboard template, builds the shared state and serves the
//! router until SIGINT or SIGTERM.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::ConfigV1;
use crate::results::ResultsDir;
use crate::routes;
use crate::state::AppState;
use crate::templates::IndexPage;

/// Builds the application state.
///
/// # Errors
///
/// Fails when the index template is missing or does not parse. The results
/// directory is not required to exist yet.
pub fn build_state(config: &ConfigV1) -> Result<AppState, tera::Error> {
    let index = IndexPage::load(&config.index_template)?;

    if !config.results_dir.is_dir() {
        warn!(
            "Results directory {} does not exist yet; metrics endpoints will return {{}}",
            config.results_dir.display()
        );
    }

    Ok(AppState::new(ResultsDir::new(config.results_dir.clone()), index))
}

/// Initializes and runs the application server.
///
/// # Errors
///
/// Returns an error if the index template cannot be loaded, if the server
/// fails to bind to the configured address, or if serving fails.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config).map_err(|e| {
        format!(
            "could not load index template {}: {}",
            config.index_template.display(),
            e
        )
    })?;

    info!(
        "Serving metrics from {} on {}",
        state.results.root().display(),
        config.bind_address
    );

    let app = routes::create_router(state);
    let listener = TcpListener::bind(&config.bind_address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Signal received, starting graceful shutdown");
}
