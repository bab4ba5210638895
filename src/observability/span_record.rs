//! Compact JSON shape for exported spans.
//!
//! One [`SpanRecord`] per line. Attributes are flattened into a JSON object
//! keyed by attribute name; empty collections and absent parents are omitted.
//!
//! ```json
//! {"traceId":"…","spanId":"…","name":"handle_event","start":"2024-05-01T10:00:00.000123Z",
//!  "durationUs":41,"attributes":{"event_type":"CursorDown"}}
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::time::SystemTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanRecord {
    pub trace_id: String,
    pub span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
    pub name: String,
    pub start: String,
    pub duration_us: u64,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, JsonValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A `tracing` event recorded inside a span.
#[derive(Debug, Serialize)]
pub struct EventRecord {
    pub name: String,
    pub at: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, JsonValue>,
}

impl From<&SpanData> for SpanRecord {
    fn from(span: &SpanData) -> Self {
        let duration = span
            .end_time
            .duration_since(span.start_time)
            .unwrap_or_default();

        Self {
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id: (span.parent_span_id != SpanId::INVALID)
                .then(|| format!("{:016x}", span.parent_span_id)),
            name: span.name.to_string(),
            start: timestamp(span.start_time),
            duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            attributes: attribute_map(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| EventRecord {
                    name: event.name.to_string(),
                    at: timestamp(event.timestamp),
                    attributes: attribute_map(&event.attributes),
                })
                .collect(),
            error: match &span.status {
                Status::Error { description } => Some(description.to_string()),
                Status::Unset | Status::Ok => None,
            },
        }
    }
}

fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Flattens key/value pairs; later duplicates win.
pub fn attribute_map(attributes: &[KeyValue]) -> Map<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect()
}

fn attribute_value(value: &Value) -> JsonValue {
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
    use serde_json::json;

    #[test]
    fn attributes_flatten_to_typed_json() {
        let map = attribute_map(&[
            KeyValue::new("event_type", "CursorDown"),
            KeyValue::new("item_count", 12_i64),
            KeyValue::new("fullscreen", true),
            KeyValue::new("ratio", f64::NAN),
        ]);

        assert_eq!(
            JsonValue::Object(map),
            json!({
                "event_type": "CursorDown",
                "item_count": 12,
                "fullscreen": true,
                "ratio": null,
            })
        );
    }

    #[test]
    fn timestamps_are_utc_micros() {
        let at = SystemTime::UNIX_EPOCH + std::time::Duration::from_micros(1_500_000);
        assert_eq!(timestamp(at), "1970-01-01T00:00:01.500000Z");
    }
}
