use std::sync::Arc;

use metrics_gateway::config::load_config;
use metrics_gateway::startup;
use metrics_gateway::utils::logger::init_logging;
use tracing::error;

#[tokio::main]
async fn main() {
    let config = load_config();
    init_logging(&config.logging);

    if let Err(e) = startup::run(Arc::new(config)).await {
        error!("Server terminated: {}", e);
        std::process::exit(1);
    }
}
