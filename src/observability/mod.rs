//! OpenTelemetry tracing exported to a local JSON file.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → TraceFileExporter → dunia-otlp.json
//! ```
//!
//! The plugin sandbox has no collector to talk to, so each closed span batch
//! is appended to `~/.local/share/zellij/dunia/dunia-otlp.json` as one OTLP
//! JSON document. The file rotates at 10 MB and keeps 3 numbered backups.
//! Worker spans join the plugin span that posted the request through the
//! trace context carried in [`crate::worker::WorkerMessage`].
//!
//! The level comes from the `trace_level` plugin option (`EnvFilter`
//! directives such as `debug` or `dunia=trace`) and defaults to `info`.

mod exporter;
mod file_writer;
pub mod init;
mod otlp;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
