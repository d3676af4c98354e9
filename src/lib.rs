//! # Service Template Library
//!
//! Settings and HTTP wiring for a web-service template:
//! - A typed, immutable settings record loaded once at startup
//! - Tracing setup driven by the configured log level
//! - CORS, request tracing and pagination helpers reading those settings
//!
//! ## Module Structure
//!
//! ```text
//! service_template/
//! +-- config/        Settings record, env layers, global instance
//! +-- presentation/  CORS and trace middleware, pagination
//! +-- startup        API router mounting
//! +-- telemetry      Logging setup
//! ```

// Configuration module
pub mod config;

// Presentation layer - HTTP helpers
pub mod presentation;

// Router assembly
pub mod startup;

// Telemetry and observability
pub mod telemetry;
