//! # Configuration Module
//!
//! This module builds the process-wide settings record.
//! Values are layered, lowest to highest precedence:
//! - Compiled-in defaults
//! - A `.env` file in the working directory (via dotenvy), if present
//! - Process environment variables
//!
//! Keys are the upper-case field names (`API_PREFIX`, `LOG_LEVEL`, ...) and
//! are matched case-sensitively. `BACKEND_CORS_ORIGINS` accepts either a JSON
//! array of strings or a comma-separated list.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use service_template::config;
//!
//! let settings = config::init()?;
//! println!("Serving {} under {}", settings.project_name, settings.mount_prefix());
//! ```

mod error;
mod fields;
mod layer;
mod log_level;
mod settings;

pub use error::ConfigurationError;
pub use fields::field_names;
pub use layer::EnvLayer;
pub use log_level::LogLevel;
pub use settings::*;

use once_cell::sync::OnceCell;

/// Global settings, installed once by [`init`].
static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Load settings from `.env` and the environment and install them globally.
///
/// Later calls return the installed record without reloading. A failed load
/// installs nothing.
pub fn init() -> Result<&'static Settings, ConfigurationError> {
    init_with(Settings::load)
}

/// Install the record produced by `load`, unless one is already installed.
pub fn init_with<F>(load: F) -> Result<&'static Settings, ConfigurationError>
where
    F: FnOnce() -> Result<Settings, ConfigurationError>,
{
    SETTINGS.get_or_try_init(load)
}

/// The installed settings, if [`init`] has succeeded.
pub fn try_get() -> Option<&'static Settings> {
    SETTINGS.get()
}

/// The installed settings.
///
/// # Panics
///
/// Panics if called before [`init`] has succeeded.
pub fn get() -> &'static Settings {
    SETTINGS
        .get()
        .expect("settings read before config::init() completed")
}
