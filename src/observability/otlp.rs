//! OTLP JSON documents for the trace file.
//!
//! Each exported batch becomes one [`TraceDocument`], serialized with serde
//! into the `resourceSpans` shape that OTLP collectors accept. Spans are
//! grouped by the instrumentation scope that produced them, so plugin and
//! worker spans stay distinguishable in the file.
//!
//! Only what `tracing-opentelemetry` emits for this crate is modeled: typed
//! attributes, span events from `tracing` log calls, and error status.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceDocument {
    resource_spans: [ResourceSpans; 1],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSpans {
    resource: ResourceBlock,
    scope_spans: Vec<ScopeSpans>,
}

#[derive(Debug, Serialize)]
struct ResourceBlock {
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct ScopeSpans {
    scope: Scope,
    spans: Vec<Span>,
}

#[derive(Debug, Serialize)]
struct Scope {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Span {
    trace_id: String,
    span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_span_id: Option<String>,
    name: String,
    kind: u8,
    start_time_unix_nano: String,
    end_time_unix_nano: String,
    attributes: Vec<Attribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<SpanEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<SpanStatus>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpanEvent {
    name: String,
    time_unix_nano: String,
    attributes: Vec<Attribute>,
}

/// Present only for spans that finished with an error or were marked ok.
#[derive(Debug, Serialize)]
struct SpanStatus {
    code: u8,
    #[serde(skip_serializing_if = "String::is_empty")]
    message: String,
}

#[derive(Debug, Serialize)]
struct Attribute {
    key: String,
    value: AnyValue,
}

/// OTLP `AnyValue`; serde's external tagging yields `{"stringValue": ..}`.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
enum AnyValue {
    BoolValue(bool),
    /// OTLP JSON carries 64-bit integers as strings.
    IntValue(String),
    DoubleValue(f64),
    StringValue(String),
}

impl From<&Value> for AnyValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::BoolValue(*b),
            Value::I64(i) => Self::IntValue(i.to_string()),
            Value::F64(f) => Self::DoubleValue(*f),
            other => Self::StringValue(other.as_str().into_owned()),
        }
    }
}

impl From<&KeyValue> for Attribute {
    fn from(kv: &KeyValue) -> Self {
        Self {
            key: kv.key.to_string(),
            value: AnyValue::from(&kv.value),
        }
    }
}

impl TraceDocument {
    /// Builds the document for one exported batch.
    pub fn new(resource: &Resource, batch: &[SpanData]) -> Self {
        let attributes = resource
            .iter()
            .map(|(key, value)| Attribute {
                key: key.to_string(),
                value: AnyValue::from(value),
            })
            .collect();

        let mut scopes: BTreeMap<&str, ScopeSpans> = BTreeMap::new();
        for data in batch {
            let library = &data.instrumentation_lib;
            scopes
                .entry(library.name.as_ref())
                .or_insert_with(|| ScopeSpans {
                    scope: Scope {
                        name: library.name.to_string(),
                        version: library.version.as_ref().map(ToString::to_string),
                    },
                    spans: Vec::new(),
                })
                .spans
                .push(Span::from(data));
        }

        Self {
            resource_spans: [ResourceSpans {
                resource: ResourceBlock { attributes },
                scope_spans: scopes.into_values().collect(),
            }],
        }
    }

    /// Serializes the document as a single JSON line.
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&SpanData> for Span {
    fn from(data: &SpanData) -> Self {
        let context = &data.span_context;
        Self {
            trace_id: context.trace_id().to_string(),
            span_id: context.span_id().to_string(),
            parent_span_id: (data.parent_span_id != SpanId::INVALID)
                .then(|| data.parent_span_id.to_string()),
            name: data.name.to_string(),
            kind: kind_code(&data.span_kind),
            start_time_unix_nano: unix_nanos(data.start_time),
            end_time_unix_nano: unix_nanos(data.end_time),
            attributes: data.attributes.iter().map(Attribute::from).collect(),
            events: data
                .events
                .iter()
                .map(|event| SpanEvent {
                    name: event.name.to_string(),
                    time_unix_nano: unix_nanos(event.timestamp),
                    attributes: event.attributes.iter().map(Attribute::from).collect(),
                })
                .collect(),
            status: match &data.status {
                Status::Unset => None,
                Status::Ok => Some(SpanStatus { code: 1, message: String::new() }),
                Status::Error { description } => Some(SpanStatus {
                    code: 2,
                    message: description.to_string(),
                }),
            },
        }
    }
}

/// OTLP enum value; 0 (unspecified) is never produced.
const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_batch_keeps_resource_attributes() {
        let resource = Resource::new(vec![
            KeyValue::new("service.name", "Dunia"),
            KeyValue::new("dunia.data_source", "~/dunia/data.json"),
        ]);

        let json = serde_json::to_value(TraceDocument::new(&resource, &[])).unwrap();
        let block = &json["resourceSpans"][0];

        assert_eq!(block["scopeSpans"], serde_json::json!([]));
        let attributes = block["resource"]["attributes"].as_array().unwrap();
        assert!(attributes.iter().any(|attr| {
            attr["key"] == "dunia.data_source"
                && attr["value"]["stringValue"] == "~/dunia/data.json"
        }));
    }

    #[test]
    fn values_serialize_with_otlp_tags() {
        let as_json = |value: Value| serde_json::to_value(AnyValue::from(&value)).unwrap();

        assert_eq!(as_json(Value::I64(42)), serde_json::json!({ "intValue": "42" }));
        assert_eq!(as_json(Value::Bool(true)), serde_json::json!({ "boolValue": true }));
        assert_eq!(as_json(Value::F64(4.5)), serde_json::json!({ "doubleValue": 4.5 }));
        assert_eq!(
            as_json(Value::from("Bangsar")),
            serde_json::json!({ "stringValue": "Bangsar" })
        );
    }

    #[test]
    fn nanos_before_epoch_clamp_to_zero() {
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_nanos(1_500)), "1500");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }
}
