//! Subscriber setup wiring `tracing` to the file exporter.

use super::exporter;
use crate::infrastructure::{default_trace_dir, expand_tilde};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name reported as `service.name` and as the instrumentation scope.
pub const SERVICE_NAME: &str = "dinescope";

/// File name of the active trace file inside the trace directory.
pub const TRACE_FILE: &str = "dinescope-otlp.json";

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` when set, else `config.trace_level`, else
/// `info`. Traces go to [`TRACE_FILE`] under `config.trace_dir` (default
/// `~/.local/share/dinescope`).
///
/// Tracing is best effort: if the directory cannot be created, nothing is
/// installed. Calling this more than once keeps the first subscriber.
///
/// # Example
///
/// ```rust
/// use dinescope::{observability::init_tracing, Config};
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     trace_dir: Some(dir.path().display().to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let dir = config
        .trace_dir
        .as_deref()
        .map_or_else(default_trace_dir, expand_tilde);
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::file_provider(dir.join(TRACE_FILE), resource, SERVICE_NAME);
    let tracer = provider.tracer(SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
