//! Subscriber setup: `tracing` spans flow through `tracing-opentelemetry`
//! into the file exporter.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter::file_tracer_provider;
use crate::Config;

/// Service and scope name recorded in exported spans.
pub const SERVICE_NAME: &str = "Dunia";

/// File name of the trace export inside the data directory.
pub const TRACE_FILE_NAME: &str = "dunia-otlp.json";

const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber, writing spans to
/// `~/.local/share/zellij/dunia/dunia-otlp.json`.
///
/// `config.trace_level` takes `EnvFilter` directives and falls back to
/// `info` when unset or unparsable. The plugin and its worker both call this;
/// only the first call in a process installs anything. Tracing stays off if
/// the data directory cannot be created.
///
/// ```rust,no_run
/// let config = dunia::Config {
///     trace_level: Some("dunia=debug".to_string()),
///     ..Default::default()
/// };
/// dunia::observability::init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let provider = file_tracer_provider(data_dir.join(TRACE_FILE_NAME), trace_resource(config));
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(trace_filter(config.trace_level.as_deref()))
        .with(otel_layer)
        .try_init();
}

/// Resource attributes stamped on every exported batch.
fn trace_resource(config: &Config) -> Resource {
    Resource::new([
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        KeyValue::new("dunia.data_source", config.data_source.clone()),
    ])
}

fn trace_filter(level: Option<&str>) -> EnvFilter {
    level
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_TRACE_LEVEL))
}
