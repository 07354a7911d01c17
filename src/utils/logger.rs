//! Tracing setup: pretty console output for local runs, or one OTel-style JSON
//! object per line for log shippers.

use std::fmt::Write as _;

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Event fields as JSON, keeping numbers and booleans typed.
#[derive(Default)]
struct Attributes(Map<String, Value>);

impl Visit for Attributes {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().into(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().into(), value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.0.insert(field.name().into(), value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().into(), value.into());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().into(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().into(), format!("{:?}", value).into());
    }
}

/// OTel log data model severity for a tracing level.
fn severity_number(level: &Level) -> u64 {
    match *level {
        Level::TRACE => 1,
        Level::DEBUG => 5,
        Level::INFO => 9,
        Level::WARN => 13,
        Level::ERROR => 17,
    }
}

#[derive(Clone)]
struct JsonLines {
    resource: Value,
}

impl JsonLines {
    fn new(config: &LoggingConfig) -> Self {
        JsonLines {
            resource: json!({
                "service.name": config.service_name,
                "service.version": config.service_version,
            }),
        }
    }

    /// Builds the log record; the `message` field becomes the body.
    fn record(&self, level: &Level, target: &str, mut attributes: Map<String, Value>) -> Value {
        let body = match attributes.remove("message") {
            Some(Value::String(message)) => message,
            Some(other) => other.to_string(),
            None => String::new(),
        };
        attributes.insert("code.target".into(), target.into());

        json!({
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            "severity_text": level.as_str(),
            "severity_number": severity_number(level),
            "body": body,
            "resource": self.resource,
            "attributes": attributes,
        })
    }
}

impl<S, N> FormatEvent<S, N> for JsonLines
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut attributes = Attributes::default();
        event.record(&mut attributes);

        let mut fields = attributes.0;
        if let Some(file) = metadata.file() {
            fields.insert("code.filepath".into(), file.into());
        }
        if let Some(line) = metadata.line() {
            fields.insert("code.lineno".into(), line.into());
        }
        fields
            .entry("message")
            .or_insert_with(|| metadata.name().into());

        let line = self.record(metadata.level(), metadata.target(), fields);
        writeln!(writer, "{}", line)
    }
}

/// Parse a `logging.level` string into a filter.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" => Some(LevelFilter::WARN),
        "error" => Some(LevelFilter::ERROR),
        _ => None,
    }
}

/// Installs the global subscriber. Panics on an unknown level, before anything is served.
pub fn init_logging(logging_config: &LoggingConfig) {
    let Some(level) = parse_level(&logging_config.level) else {
        panic!(
            "Invalid logging.level '{}'. Valid values: trace, debug, info, warn, error",
            logging_config.level
        );
    };
    let filter = EnvFilter::default().add_directive(level.into());
    let registry = tracing_subscriber::registry().with(filter);

    match logging_config.format {
        LogFormat::Json => registry
            .with(fmt::layer().event_format(JsonLines::new(logging_config)))
            .init(),
        LogFormat::Console => registry.with(fmt::layer().pretty()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_level(" DEBUG "), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("warn"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn json_record_carries_service_resource_and_body() {
        let formatter = JsonLines::new(&LoggingConfig::default());
        let mut attributes = Map::new();
        attributes.insert("message".into(), "loaded document".into());
        attributes.insert("document".into(), "serial".into());

        let record = formatter.record(&Level::WARN, "metrics_gateway::routes", attributes);

        assert_eq!(record["severity_text"], "WARN");
        assert_eq!(record["severity_number"], 13);
        assert_eq!(record["body"], "loaded document");
        assert_eq!(record["resource"]["service.name"], "metrics-gateway");
        assert_eq!(record["attributes"]["document"], "serial");
        assert_eq!(record["attributes"]["code.target"], "metrics_gateway::routes");
        assert!(record["attributes"].get("message").is_none());
    }
}
