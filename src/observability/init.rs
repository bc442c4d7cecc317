//! Tracing subscriber setup.

use super::tracer;
use crate::infrastructure::paths::{get_data_dir, TRACE_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to every exported span.
pub const SERVICE_NAME: &str = "sidepanes";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, then from
/// `config.trace_level`, then defaults to `info`. Spans are exported as JSON
/// lines to `sidepanes-otlp.json` in the data directory.
///
/// Tracing is optional: if the data directory cannot be created, nothing is
/// installed. Only the first successful call in a process takes effect.
///
/// # Example
///
/// ```rust
/// use sidepanes::observability::init_tracing;
/// use sidepanes::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
