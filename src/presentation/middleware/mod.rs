//! Middleware
//!
//! Tower middleware configured from settings.

pub mod cors;
pub mod logging;

pub use cors::create_cors_layer;
pub use logging::create_trace_layer;
