//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a settings record.
///
/// Loading never yields a partially populated record: any of these aborts
/// the whole load.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// An explicitly supplied override could not be coerced to the field's type.
    #[error("invalid value for {field}: {value:?} is not {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The env file exists but could not be read or parsed.
    #[error("failed to read env file {}: {reason}", path.display())]
    EnvFile { path: PathBuf, reason: String },

    #[error("failed to resolve settings: {0}")]
    Resolve(#[from] config::ConfigError),
}

impl ConfigurationError {
    /// Wrap a dotenv error without echoing the offending line, which may hold secrets.
    pub(crate) fn env_file(path: impl Into<PathBuf>, err: &dotenvy::Error) -> Self {
        let reason = match err {
            dotenvy::Error::LineParse(_, index) => format!("malformed line at offset {}", index),
            dotenvy::Error::Io(io) => io.to_string(),
            other => other.to_string(),
        };

        Self::EnvFile {
            path: path.into(),
            reason,
        }
    }

    /// Name of the field at fault, when the failure is a coercion error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidValue { field, .. } => Some(*field),
            _ => None,
        }
    }
}
