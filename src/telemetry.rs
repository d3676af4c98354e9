//! Telemetry and Observability
//!
//! Structured logging setup driven by `LOG_LEVEL` and `LOG_NAME`.

use tracing::Span;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;

/// Filter directive derived from the configured log level.
pub fn default_filter(settings: &Settings) -> String {
    settings
        .log_level
        .tracing_level()
        .to_string()
        .to_ascii_lowercase()
}

/// Initialize tracing subscriber
///
/// `RUST_LOG` takes precedence over `LOG_LEVEL` when set.
pub fn init_tracing(settings: &Settings) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(settings)));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!(log_name = %settings.log_name, level = %settings.log_level, "Tracing initialized");
}

/// Root span tagging events with the logger name and environment.
pub fn service_span(settings: &Settings) -> Span {
    tracing::info_span!("service", name = %settings.log_name, env = %settings.env)
}
