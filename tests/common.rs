use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use metrics_gateway::config::ConfigV1;
use metrics_gateway::results::MetricsDocument;
use metrics_gateway::routes::create_router;
use metrics_gateway::startup::build_state;
use tempfile::TempDir;

pub fn bundled_template() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/index.html")
}

pub fn test_config(results_dir: &Path) -> ConfigV1 {
    ConfigV1 {
        results_dir: results_dir.to_path_buf(),
        index_template: bundled_template(),
        ..ConfigV1::default()
    }
}

/// A router over a fresh, empty results directory.
pub fn build_app() -> (Router, TempDir) {
    let results = tempfile::tempdir().expect("create results dir");
    let state = build_state(&test_config(results.path())).expect("state should build");
    (create_router(state), results)
}

pub fn write_document(dir: &Path, document: MetricsDocument, contents: &str) {
    std::fs::write(dir.join(document.file_name()), contents).expect("write metrics file");
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read")
        .to_vec()
}
