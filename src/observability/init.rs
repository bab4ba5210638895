//! Tracing subscriber initialization.

use super::exporter;
use super::rotating_writer::{RotatingWriter, DEFAULT_MAX_BYTES};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Span file name inside the plugin data directory.
pub const SPAN_FILE_NAME: &str = "gamedeck-spans.jsonl";

/// Installs the global subscriber: `EnvFilter` plus the span file exporter.
///
/// Skipped silently if the data directory cannot be created, and a no-op when
/// a subscriber is already installed.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "gamedeck",
    )]);

    let writer = RotatingWriter::new(data_dir.join(SPAN_FILE_NAME), DEFAULT_MAX_BYTES);
    let provider = exporter::create_tracer_provider(writer, resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("gamedeck"));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
