//! Worker thread implementation for venue data loading.
//!
//! This module implements the Zellij worker thread interface, reading the venue
//! data file off the main plugin thread so a large file never blocks rendering.
//! It includes distributed tracing support for cross-thread observability.

use crate::catalog::{FileSource, VenueSource, VenueStore};
use crate::domain::error::{DuniaError, Result};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::Path;
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// Runs on a separate thread spawned by Zellij and processes messages sent
/// from the main plugin thread. Loads are stateless, so the worker only counts
/// them for logging.
#[derive(Serialize, Deserialize, Default)]
pub struct DuniaWorker {
    #[serde(skip)]
    loads: usize,
}

impl DuniaWorker {
    /// Helper for handling load results with consistent logging.
    fn handle_load_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "worker operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "worker operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Handles the `LoadVenues` message.
    ///
    /// Reads the file and checks that venue ids are unique before replying, so
    /// the plugin receives either a usable record set or an error.
    fn handle_load_venues(&mut self, path: &Path) -> WorkerResponse {
        self.loads += 1;
        let source = FileSource::new(path.to_path_buf());

        Self::handle_load_result(
            "load venues",
            source
                .load()
                .and_then(|venues| VenueStore::new(venues.clone()).map(|_| venues)),
            |venues| {
                tracing::info!(
                    venue_count = venues.len(),
                    path = ?path,
                    load = self.loads,
                    "venue data read"
                );
                WorkerResponse::VenuesLoaded { venues }
            },
        )
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// Automatically attaches trace context and creates a tracing span for the
    /// operation.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadVenues { path, .. } => self.handle_load_venues(&path),
        }
    }

    /// Decodes a raw payload and handles it. A payload that is not a
    /// [`WorkerMessage`] is answered with a [`DuniaError::Worker`] error.
    fn respond_to(&mut self, payload: &str) -> WorkerResponse {
        match serde_json::from_str::<WorkerMessage>(payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: DuniaError::Worker(format!("malformed request: {e}")).to_string(),
                }
            }
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring logs
/// from both threads are written to the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for DuniaWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Deserializes the message payload
    /// 3. Processes the message via `handle_message`
    /// 4. Serializes and sends the response back to the main thread
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
        }

        let response = self.respond_to(&payload);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn load(path: PathBuf) -> WorkerResponse {
        DuniaWorker::default().handle_message(WorkerMessage::LoadVenues {
            path,
            trace_context: None,
        })
    }

    #[test]
    fn loads_venues_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"id": 2, "name": "KLCC Park", "type": "Park", "location": "KLCC"},
                {"id": 1, "name": "Cafe Bangsar", "type": "Restaurant", "location": "Bangsar"}
            ]"#,
        )
        .unwrap();

        let WorkerResponse::VenuesLoaded { venues } = load(file.path().to_path_buf()) else {
            panic!("expected venues");
        };
        let ids: Vec<i64> = venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn malformed_payload_is_a_worker_error() {
        let response = DuniaWorker::default().respond_to("{\"LoadVenues\": 7}");
        assert!(matches!(
            response,
            WorkerResponse::Error { message } if message.starts_with("Worker communication error: malformed request")
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let response = load(dir.path().join("data.json"));
        assert!(matches!(response, WorkerResponse::Error { message } if message.starts_with("load venues: IO error")));
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"id": 1, "name": "A", "type": "Park", "location": "X"},
                {"id": 1, "name": "B", "type": "Park", "location": "Y"}
            ]"#,
        )
        .unwrap();

        let response = load(file.path().to_path_buf());
        assert_eq!(
            response,
            WorkerResponse::Error {
                message: "load venues: Duplicate venue id: 1".to_string()
            }
        );
    }

    #[test]
    fn invalid_trace_context_is_ignored() {
        let message = WorkerMessage::LoadVenues {
            path: PathBuf::from("/nonexistent/data.json"),
            trace_context: Some(crate::worker::TraceContext {
                trace_id: "not-hex".to_string(),
                parent_span_id: "zz".to_string(),
            }),
        };
        assert!(DuniaWorker::attach_parent_trace_context(&message).is_none());
    }
}
