//! Layered key-value source: bundled defaults plus an optional user override.
//!
//! Responsibilities:
//! - Read the base store unconditionally and the override store only when present.
//! - Resolve `(section, key)` with override precedence.
//!
//! Does NOT handle:
//! - Transforming or validating raw values (see `loader` and `types`).
//! - Choosing default file locations (see `paths.rs`).
//!
//! Invariants:
//! - A missing or unreadable base store is `ConfigError::MissingResource`.
//! - An absent or zero-length override store behaves exactly like an empty one.
//! - Resolution consults the override store, then the base store, and nothing else.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::loader::ConfigError;
use crate::store::KeyValueStore;

/// Which store supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// The bundled defaults.
    Base,
    /// The user override file.
    Override,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Override => write!(f, "override"),
        }
    }
}

/// Two stores consulted in override-then-base order.
#[derive(Debug, Clone, Default)]
pub struct LayeredSource {
    base: KeyValueStore,
    overrides: KeyValueStore,
}

impl LayeredSource {
    /// Build a source from already-parsed stores.
    pub fn from_stores(base: KeyValueStore, overrides: KeyValueStore) -> Self {
        Self { base, overrides }
    }

    /// Read the bundled defaults. The file must exist.
    pub fn load_base(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::MissingResource {
            path: path.to_path_buf(),
            source,
        })?;

        self.base = KeyValueStore::parse(&text, path)?;
        debug!(path = %path.display(), keys = self.base.len(), "Loaded base parameters");
        Ok(())
    }

    /// Read the user override if it exists and is non-empty; otherwise leave it empty.
    pub fn load_override(&mut self, path: &Path) -> Result<(), ConfigError> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No override parameters found");
                self.overrides = KeyValueStore::empty();
                return Ok(());
            }
            Err(source) => {
                return Err(ConfigError::OverrideUnreadable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if !metadata.is_file() || metadata.len() == 0 {
            debug!(path = %path.display(), "Override parameters file is empty, ignoring");
            self.overrides = KeyValueStore::empty();
            return Ok(());
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::OverrideUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        self.overrides = KeyValueStore::parse(&text, path)?;
        debug!(
            path = %path.display(),
            keys = self.overrides.len(),
            "Loaded override parameters"
        );
        Ok(())
    }

    /// Resolve the raw value at `(section, key)`.
    pub fn resolve(&self, section: &str, key: &str) -> Result<&str, ConfigError> {
        self.resolve_with_layer(section, key).map(|(value, _)| value)
    }

    /// Resolve the raw value at `(section, key)` and report which layer supplied it.
    pub fn resolve_with_layer(
        &self,
        section: &str,
        key: &str,
    ) -> Result<(&str, Layer), ConfigError> {
        if let Some(value) = self.overrides.get(section, key) {
            return Ok((value, Layer::Override));
        }

        self.base
            .get(section, key)
            .map(|value| (value, Layer::Base))
            .ok_or_else(|| ConfigError::MissingKey {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Returns true if an override store with at least one key was loaded.
    pub fn has_overrides(&self) -> bool {
        !self.overrides.is_empty()
    }
}
