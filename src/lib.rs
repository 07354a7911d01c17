//! Library exports for the metrics gateway, shared between the binary and tests.

pub mod config;
pub mod metrics;
pub mod results;
pub mod routes;
pub mod startup;
pub mod state;
pub mod templates;
pub mod utils;
