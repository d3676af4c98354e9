//! Override layers: the env file and the process environment.

use std::collections::BTreeMap;
use std::path::Path;

use config::{ConfigError, Map, Source, Value};

use super::error::ConfigurationError;
use super::fields::{self, FIELDS};

/// Raw `KEY=VALUE` overrides from one source, restricted to known settings keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvLayer {
    origin: String,
    values: BTreeMap<&'static str, String>,
}

impl EnvLayer {
    /// An empty layer that contributes nothing.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            values: BTreeMap::new(),
        }
    }

    /// Build a layer from key/value pairs. Unknown keys are dropped; a
    /// repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(origin: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut layer = Self::new(origin);
        for (key, value) in pairs {
            if let Some(field) = fields::lookup(key.as_ref()) {
                layer.values.insert(field.name, value.into());
            }
        }
        layer
    }

    /// Read a dotenv file. A missing file yields an empty layer.
    ///
    /// Values are only collected, never exported into the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let origin = format!("env file {}", path.display());

        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(err) if err.not_found() => {
                tracing::debug!(path = %path.display(), "No env file found, skipping");
                return Ok(Self::new(origin));
            }
            Err(err) => return Err(ConfigurationError::env_file(path, &err)),
        };

        let mut pairs = Vec::new();
        for item in iter {
            pairs.push(item.map_err(|err| ConfigurationError::env_file(path, &err))?);
        }

        Ok(Self::from_pairs(origin, pairs))
    }

    /// Snapshot the settings keys present in the process environment.
    pub fn from_process_env() -> Result<Self, ConfigurationError> {
        let mut layer = Self::new("environment");
        for (key, value) in std::env::vars_os() {
            let Some(field) = key.to_str().and_then(fields::lookup) else {
                continue;
            };
            let value = value
                .into_string()
                .map_err(|raw| ConfigurationError::InvalidValue {
                    field: field.name,
                    value: raw.to_string_lossy().into_owned(),
                    expected: "valid UTF-8",
                })?;
            layer.values.insert(field.name, value);
        }
        Ok(layer)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coerce every override into its field's type.
    pub(crate) fn resolve(&self) -> Result<ResolvedLayer, ConfigurationError> {
        let mut values = Map::new();
        for field in FIELDS {
            if let Some(raw) = self.values.get(field.name) {
                values.insert(field.key.to_string(), field.coerce(raw, &self.origin)?);
            }
        }

        Ok(ResolvedLayer { values })
    }
}

/// A layer whose values are already typed, ready to feed the config builder.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedLayer {
    values: Map<String, Value>,
}

impl Source for ResolvedLayer {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        Ok(self.values.clone())
    }
}
