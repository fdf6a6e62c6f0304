//! Span exporter that appends OTLP JSON lines to the trace file.

use std::path::PathBuf;

use futures_util::future::{self, BoxFuture, FutureExt};
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};

use super::file_writer::FileWriter;
use super::otlp::TraceDocument;

/// Writes every exported batch as one [`TraceDocument`] line.
///
/// The provider runs it behind a simple (unbatched) processor, so spans reach
/// the file as soon as they close. That matters in a plugin that can be torn
/// down without a final flush.
#[derive(Debug)]
struct TraceFileExporter {
    writer: FileWriter,
    resource: Resource,
    closed: bool,
}

impl TraceFileExporter {
    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.closed {
            return Err(TraceError::from("trace file exporter is closed"));
        }
        let line = TraceDocument::new(&self.resource, batch)
            .to_line()
            .map_err(|e| TraceError::from(e.to_string()))?;
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for TraceFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        future::ready(self.write_batch(&batch)).boxed()
    }

    fn shutdown(&mut self) {
        self.closed = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a tracer provider whose spans land in `file_path`.
pub fn file_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = TraceFileExporter {
        writer: FileWriter::new(file_path),
        resource: resource.clone(),
        closed: false,
    };

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Span as _, Status, TraceContextExt, Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    fn read_documents(path: &std::path::Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn closed_spans_are_appended_as_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dunia-otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "Dunia")]);
        let provider = file_tracer_provider(path.clone(), resource);

        let tracer = provider.tracer("dunia");
        tracer.in_span("handle_event", |cx| {
            cx.span().set_attribute(KeyValue::new("venue_count", 12_i64));
            tracer.in_span("filter_venues", |cx| {
                cx.span().add_event("no matches", vec![KeyValue::new("query", "zoo")]);
            });
        });
        let _ = provider.force_flush();

        let documents = read_documents(&path);
        assert_eq!(documents.len(), 2);

        let child = &documents[0]["resourceSpans"][0]["scopeSpans"][0];
        let parent = &documents[1]["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(child["scope"]["name"], "dunia");
        assert_eq!(child["spans"][0]["name"], "filter_venues");
        assert_eq!(child["spans"][0]["parentSpanId"], parent["spans"][0]["spanId"]);
        assert_eq!(child["spans"][0]["events"][0]["name"], "no matches");

        let root = &parent["spans"][0];
        assert_eq!(root["name"], "handle_event");
        assert!(root.get("parentSpanId").is_none());
        assert!(root.get("status").is_none());
        assert_eq!(root["attributes"][0]["value"]["intValue"], "12");
    }

    #[test]
    fn error_status_carries_its_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dunia-otlp.json");
        let provider = file_tracer_provider(path.clone(), Resource::empty());

        let mut span = provider.tracer("dunia").start("file_source_load");
        span.set_status(Status::error("No such file"));
        span.end();
        let _ = provider.force_flush();

        let documents = read_documents(&path);
        let status = &documents[0]["resourceSpans"][0]["scopeSpans"][0]["spans"][0]["status"];
        assert_eq!(status["code"], 2);
        assert_eq!(status["message"], "No such file");
    }

    #[test]
    fn shut_down_exporter_rejects_batches() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = TraceFileExporter {
            writer: FileWriter::new(dir.path().join("dunia-otlp.json")),
            resource: Resource::empty(),
            closed: false,
        };

        assert!(matches!(exporter.export(Vec::new()).now_or_never(), Some(Ok(()))));
        exporter.shutdown();
        assert!(matches!(exporter.export(Vec::new()).now_or_never(), Some(Err(_))));
    }
}
