//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use std::io::Write;

use axum::{body::Body, http::Request, routing::get, Router};
use tempfile::NamedTempFile;
use tower::ServiceExt;

use service_template::config::Settings;
use service_template::startup;

/// Build an environment map from literal pairs
pub fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Write `contents` to a temporary env file
pub fn env_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create env file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write env file");
    file
}

/// Load settings from injected overrides only
pub fn settings_from(pairs: &[(&str, &str)]) -> Settings {
    Settings::load_from(None, env(pairs)).expect("Failed to load settings")
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Mount a small API under the configured prefix
    pub fn new(settings: &Settings) -> Self {
        let api = Router::new().route("/ping", get(|| async { "pong" }));

        Self {
            router: startup::mount(settings, api),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a GET request carrying an `Origin` header
    pub async fn get_with_origin(&self, uri: &str, origin: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .header("Origin", origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}
