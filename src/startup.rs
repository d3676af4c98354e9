//! Application Startup
//!
//! Router assembly from settings.

use axum::Router;

use crate::config::Settings;
use crate::presentation::middleware::{cors, logging};

/// Mount `api` under `API_PREFIX` with request tracing and CORS applied.
///
/// An empty or `/` prefix serves the API at the root.
pub fn mount(settings: &Settings, api: Router) -> Router {
    let prefix = settings.mount_prefix();
    let router = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(&prefix, api)
    };

    tracing::debug!(prefix = %prefix, origins = settings.backend_cors_origins.len(), "API mounted");

    router
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(settings))
}
