//! Section/key addressable text store.
//!
//! Responsibilities:
//! - Parse one parameter document (TOML) into a flat `section -> key -> raw string` map.
//! - Normalize scalar values to their textual form so records see raw strings only.
//!
//! Does NOT handle:
//! - Deciding which file to read or whether it is optional (see `source.rs`).
//! - Interpreting values (see `types` and the resolver in `loader`).
//!
//! Invariants:
//! - Only one level of sections is accepted; every key lives inside a section.
//! - Strings, integers, floats and booleans keep their textual form.
//! - Arrays of scalars are joined with the list delimiter so they feed split fields.
//! - Datetimes and nested tables are rejected instead of silently stringified.

use std::collections::BTreeMap;
use std::path::Path;

use toml::Value;

use crate::constants::LIST_DELIMITER;
use crate::loader::ConfigError;

/// One parsed parameter document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueStore {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl KeyValueStore {
    /// An empty store, used when the override file is absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a TOML document. `origin` is only used for error reporting.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let parse_error = |message: String| ConfigError::StoreParse {
            path: origin.to_path_buf(),
            message,
        };

        let document: toml::Table = toml::from_str(text).map_err(|e| parse_error(e.to_string()))?;

        let mut sections = BTreeMap::new();
        for (section, body) in document {
            let Value::Table(entries) = body else {
                return Err(parse_error(format!(
                    "key '{section}' must be inside a [section]"
                )));
            };

            let mut keys = BTreeMap::new();
            for (key, value) in entries {
                let raw = raw_text(&value).ok_or_else(|| {
                    parse_error(format!(
                        "value of '{section}.{key}' must be a string, number, boolean or list of those"
                    ))
                })?;
                keys.insert(key, raw);
            }
            sections.insert(section, keys);
        }

        Ok(Self { sections })
    }

    /// Look up the raw value at `(section, key)`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    /// Returns true when the store holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.sections.values().all(BTreeMap::is_empty)
    }

    /// Number of keys across all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }
}

/// Textual form of a scalar (or list of scalars), `None` for anything else.
fn raw_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => {
            let parts = items.iter().map(scalar_text).collect::<Option<Vec<_>>>()?;
            let delimiter = LIST_DELIMITER.to_string();
            Some(parts.join(delimiter.as_str()))
        }
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(_) | Value::Array(_) | Value::Table(_) => None,
    }
}
