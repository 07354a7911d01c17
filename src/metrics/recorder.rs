//! Metrics recording implementation using Prometheus.

use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec,
    Encoder, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// How a document request was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Found,
    Missing,
    Error,
}

impl LoadOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadOutcome::Found => "found",
            LoadOutcome::Missing => "missing",
            LoadOutcome::Error => "error",
        }
    }
}

/// Trait for recording application metrics.
pub trait MetricsRecorder: Clone + Send + Sync + 'static {
    /// Records a metrics document request with its outcome.
    fn record_document_load(&self, document: &str, outcome: LoadOutcome);

    /// Records how long reading and parsing a document took.
    fn record_document_duration(&self, document: &str, duration_secs: f64);
}

/// Prometheus metrics collector.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    document_requests_total: CounterVec,
    document_load_duration_seconds: HistogramVec,
}

impl Metrics {
    /// Creates a new metrics instance with its own Prometheus registry.
    pub fn new() -> Self {
        let registry = Arc::new(Registry::new());

        let document_requests_total = register_counter_vec_with_registry!(
            Opts::new(
                "metrics_document_requests_total",
                "Total number of metrics document requests"
            ),
            &["document", "outcome"],
            registry.clone()
        )
        .expect("Failed to register metrics_document_requests_total");

        let document_load_duration_seconds = register_histogram_vec_with_registry!(
            "metrics_document_load_duration_seconds",
            "Time spent reading and parsing a metrics document in seconds",
            &["document"],
            vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0],
            registry.clone()
        )
        .expect("Failed to register metrics_document_load_duration_seconds");

        Metrics {
            registry,
            document_requests_total,
            document_load_duration_seconds,
        }
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder for Metrics {
    fn record_document_load(&self, document: &str, outcome: LoadOutcome) {
        self.document_requests_total
            .with_label_values(&[document, outcome.as_str()])
            .inc();
    }

    fn record_document_duration(&self, document: &str, duration_secs: f64) {
        self.document_load_duration_seconds
            .with_label_values(&[document])
            .observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_recorded_loads() {
        let metrics = Metrics::new();
        metrics.record_document_load("serial", LoadOutcome::Found);
        metrics.record_document_load("serial", LoadOutcome::Found);
        metrics.record_document_duration("serial", 0.002);

        let text = metrics.render().unwrap();
        let loads = r#"metrics_document_requests_total{document="serial",outcome="found"} 2"#;
        let timings = r#"metrics_document_load_duration_seconds_count{document="serial"} 1"#;
        assert!(text.contains(loads), "{text}");
        assert!(text.contains(timings), "{text}");
    }

    #[test]
    fn registries_are_independent() {
        let first = Metrics::new();
        let second = Metrics::new();
        first.record_document_load("compare", LoadOutcome::Error);

        assert!(!second.render().unwrap().contains("compare"));
    }
}
