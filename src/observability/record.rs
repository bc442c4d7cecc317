//! Flat JSON records for exported spans.
//!
//! Each finished span becomes one [`SpanRecord`], serialized on a single line.
//! Records carry enough to rebuild the span tree offline (trace, span and
//! parent ids) and the structured fields attached by `tracing` macros.

use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// One finished span.
#[derive(Debug, Clone, Serialize)]
pub struct SpanRecord {
    /// Reporting service.
    pub service: String,
    /// Span name (the `tracing` span name).
    pub name: String,
    /// 32 hex digits.
    pub trace_id: String,
    /// 16 hex digits.
    pub span_id: String,
    /// 16 hex digits, absent for root spans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
    /// Start time in nanoseconds since the Unix epoch.
    pub start_unix_nanos: u128,
    /// Duration in microseconds.
    pub duration_us: u128,
    /// Span fields.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, JsonValue>,
    /// Events recorded inside the span (`tracing` events).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventRecord>,
    /// `"unset"`, `"ok"` or `"error: <description>"`.
    pub status: String,
}

/// One event recorded inside a span.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    /// Event message.
    pub name: String,
    /// Offset from span start in microseconds.
    pub offset_us: u128,
    /// Event fields.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, JsonValue>,
}

impl SpanRecord {
    /// Builds the record of one exported span.
    #[must_use]
    pub fn from_span(service: &str, span: &SpanData) -> Self {
        let start = unix_nanos(span.start_time);
        let parent_span_id = (span.parent_span_id != SpanId::INVALID)
            .then(|| format!("{:016x}", span.parent_span_id));

        let events = span
            .events
            .iter()
            .map(|event| EventRecord {
                name: event.name.to_string(),
                offset_us: unix_nanos(event.timestamp).saturating_sub(start) / 1_000,
                attributes: attribute_map(&event.attributes),
            })
            .collect();

        Self {
            service: service.to_string(),
            name: span.name.to_string(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            start_unix_nanos: start,
            duration_us: unix_nanos(span.end_time).saturating_sub(start) / 1_000,
            attributes: attribute_map(&span.attributes),
            events,
            status: status_label(&span.status),
        }
    }
}

fn unix_nanos(time: SystemTime) -> u128 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
}

fn status_label(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}

/// Collects key-values into a JSON object, last key wins.
pub fn attribute_map(attributes: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect()
}

/// Converts an attribute value to its natural JSON form.
///
/// Arrays are rendered with their display form.
pub fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => serde_json::Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_keep_their_json_types() {
        let map = attribute_map(&[
            KeyValue::new("side", "right"),
            KeyValue::new("width", 320_i64),
            KeyValue::new("engaged", true),
            KeyValue::new("ratio", f64::NAN),
        ]);

        assert_eq!(map["side"], JsonValue::String("right".into()));
        assert_eq!(map["width"], JsonValue::from(320));
        assert_eq!(map["engaged"], JsonValue::Bool(true));
        assert_eq!(map["ratio"], JsonValue::Null);
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(&Status::Unset), "unset");
        assert_eq!(
            status_label(&Status::error("store poisoned")),
            "error: store poisoned"
        );
    }
}
