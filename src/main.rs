//! # Service Template
//!
//! Entry point that initializes:
//! - Configuration loading (`.env` and environment)
//! - Tracing/logging subsystem

use anyhow::{Context, Result};
use tracing::{debug, info};

use service_template::config;
use service_template::telemetry;

fn main() -> Result<()> {
    // Tracing depends on the settings, so a load failure surfaces through the
    // returned error and a non-zero exit status.
    let settings = config::init().context("Failed to load configuration")?;

    telemetry::init_tracing(settings);
    let _span = telemetry::service_span(settings).entered();

    info!(
        env = %settings.env,
        project = %settings.project_name,
        api_prefix = %settings.mount_prefix(),
        cors_origins = settings.backend_cors_origins.len(),
        default_page_size = settings.default_page_size,
        max_page_size = settings.max_page_size,
        github_enabled = settings.github_enabled(),
        gcloud_project = settings.gcloud_project_id.as_deref().unwrap_or("-"),
        "Configuration loaded"
    );
    debug!(keys = ?config::field_names().collect::<Vec<_>>(), "Recognized settings keys");

    Ok(())
}
