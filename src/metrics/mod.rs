//! Metrics collection and exposition for Prometheus.
//!
//! Tracks how often each metrics document is requested and how long loading it takes.

mod recorder;

pub use recorder::{LoadOutcome, Metrics, MetricsRecorder};
