//! Presentation Layer
//!
//! HTTP helpers that read the settings record.

pub mod middleware;
pub mod pagination;
