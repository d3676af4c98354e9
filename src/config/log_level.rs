//! Integer log severity.

use std::fmt;

use serde::Deserialize;
use tracing::Level;

/// Log severity on the conventional integer scale (`10` debug through `50` critical).
///
/// Any non-negative integer is accepted; [`LogLevel::tracing_level`] maps it
/// onto the nearest level at or below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(u32);

impl LogLevel {
    pub const NOTSET: Self = Self(0);
    pub const DEBUG: Self = Self(10);
    pub const INFO: Self = Self(20);
    pub const WARNING: Self = Self(30);
    pub const ERROR: Self = Self(40);
    pub const CRITICAL: Self = Self(50);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Threshold mapping onto `tracing` levels. Critical folds into `ERROR`.
    pub fn tracing_level(self) -> Level {
        match self.0 {
            40.. => Level::ERROR,
            30..=39 => Level::WARN,
            20..=29 => Level::INFO,
            10..=19 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("NOTSET"),
            10 => Some("DEBUG"),
            20 => Some("INFO"),
            30 => Some("WARNING"),
            40 => Some("ERROR"),
            50 => Some("CRITICAL"),
            _ => None,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Level {}", self.0),
        }
    }
}
