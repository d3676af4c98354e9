//! Field table mapping environment keys to settings fields.
//!
//! Every override source goes through this table: keys not listed here are
//! ignored, and raw strings are coerced according to the field's kind before
//! they reach the layering engine.

use config::{Value, ValueKind};

use super::error::ConfigurationError;

/// Primitive type an override string is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Text,
    OptionalText,
    Integer,
    List,
}

/// A single settings field.
#[derive(Debug)]
pub(crate) struct Field {
    /// Environment key, matched case-sensitively.
    pub name: &'static str,
    /// Path of the field in the resolved record.
    pub key: &'static str,
    pub kind: FieldKind,
}

pub(crate) const FIELDS: &[Field] = &[
    Field { name: "ENV", key: "env", kind: FieldKind::Text },
    Field { name: "LOG_LEVEL", key: "log_level", kind: FieldKind::Integer },
    Field { name: "LOG_NAME", key: "log_name", kind: FieldKind::Text },
    Field { name: "PROJECT_NAME", key: "project_name", kind: FieldKind::Text },
    Field { name: "API_PREFIX", key: "api_prefix", kind: FieldKind::Text },
    Field { name: "BACKEND_CORS_ORIGINS", key: "backend_cors_origins", kind: FieldKind::List },
    Field { name: "SQLALCHEMY_DATABASE_URI", key: "sqlalchemy_database_uri", kind: FieldKind::Text },
    Field { name: "DEFAULT_PAGE_SIZE", key: "default_page_size", kind: FieldKind::Integer },
    Field { name: "MAX_PAGE_SIZE", key: "max_page_size", kind: FieldKind::Integer },
    Field { name: "GITHUB_ACCESS_TOKEN", key: "github_access_token", kind: FieldKind::OptionalText },
    Field { name: "GCLOUD_PROJECT_ID", key: "gcloud_project_id", kind: FieldKind::OptionalText },
];

/// Environment keys recognized by the loader, in declaration order.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|f| f.name)
}

pub(crate) fn lookup(name: &str) -> Option<&'static Field> {
    FIELDS.iter().find(|f| f.name == name)
}

impl Field {
    /// Coerce a raw override string into a typed value.
    pub(crate) fn coerce(&self, raw: &str, origin: &String) -> Result<Value, ConfigurationError> {
        let kind = match self.kind {
            FieldKind::Text | FieldKind::OptionalText => ValueKind::String(raw.to_owned()),
            FieldKind::Integer => {
                let n: u32 = raw
                    .trim()
                    .parse()
                    .map_err(|_| self.invalid(raw, "a non-negative integer"))?;
                ValueKind::I64(i64::from(n))
            }
            FieldKind::List => {
                let items = parse_list(raw)
                    .map_err(|_| self.invalid(raw, "a JSON array of strings or a comma-separated list"))?;
                ValueKind::Array(
                    items
                        .into_iter()
                        .map(|item| Value::new(Some(origin), item))
                        .collect(),
                )
            }
        };

        Ok(Value::new(Some(origin), kind))
    }

    fn invalid(&self, raw: &str, expected: &'static str) -> ConfigurationError {
        ConfigurationError::InvalidValue {
            field: self.name,
            value: raw.to_owned(),
            expected,
        }
    }
}

/// Parse a list from a flat string.
///
/// A value starting with `[` is read as a JSON array of strings, anything
/// else is split on commas with blank entries dropped.
pub(crate) fn parse_list(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed);
    }

    Ok(trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect())
}
