//! Access to the results directory written by the external benchmark producer.
//!
//! The gateway never writes here. Every request re-reads the file it needs, so
//! the latest content on disk is always what gets served.

mod document;
mod results_dir;

pub use document::MetricsDocument;
pub use results_dir::{empty_document, ResultsDir, ResultsError};
