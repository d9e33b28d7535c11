//! Configuration resolver.
//!
//! Responsibilities:
//! - Locate and read the base and override stores (`ConfigLoader::read_source`).
//! - Follow each record's address table, apply transforms and build the records.
//! - Produce a complete `Settings` snapshot or a typed error, never a partial one.
//!
//! Does NOT handle:
//! - Caching the result (see `facade.rs`).
//! - Field validation rules (they live in the record constructors in `types`).
//!
//! Invariants / Assumptions:
//! - Override values take precedence over base values for every key.
//! - The first missing key or invalid field aborts the whole load.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::ConfigError;
use crate::paths::{default_base_path, default_override_path};
use crate::source::LayeredSource;
use crate::types::{AdvancedOptions, CharSettings, GeneralSettings, RawFields, Record, Settings};

/// Resolver that builds `Settings` from the layered parameter stores.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_path: PathBuf,
    override_path: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading `./config/params.toml` and `~/.d4lf/params.toml`.
    pub fn new() -> Self {
        Self {
            base_path: default_base_path(),
            override_path: None,
        }
    }

    /// Override the bundled defaults location.
    pub fn with_base_path(mut self, path: PathBuf) -> Self {
        self.base_path = path;
        self
    }

    /// Override the user override location (primarily for testing).
    pub fn with_override_path(mut self, path: PathBuf) -> Self {
        self.override_path = Some(path);
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// The override location: the configured path, or the one under the user's home.
    ///
    /// `None` when no path was configured and the home directory is unknown.
    pub fn override_path(&self) -> Option<PathBuf> {
        self.override_path.clone().or_else(default_override_path)
    }

    /// Read both stores.
    pub fn read_source(&self) -> Result<LayeredSource, ConfigError> {
        self.read_layers(self.override_path().as_deref())
    }

    pub(super) fn read_layers(
        &self,
        override_path: Option<&Path>,
    ) -> Result<LayeredSource, ConfigError> {
        let mut source = LayeredSource::default();
        source.load_base(&self.base_path)?;
        match override_path {
            Some(path) => source.load_override(path)?,
            None => debug!("No home directory, override parameters skipped"),
        }
        Ok(source)
    }

    /// Read both stores and build every record.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let source = self.read_source()?;
        let settings = Self::resolve(&source)?;

        info!(
            base = %self.base_path.display(),
            overrides = source.has_overrides(),
            "Parameters loaded"
        );
        Ok(settings)
    }

    /// Build every record from an already-read source.
    pub fn resolve(source: &LayeredSource) -> Result<Settings, ConfigError> {
        Ok(Settings::new(
            resolve_record::<AdvancedOptions>(source)?,
            resolve_record::<CharSettings>(source)?,
            resolve_record::<GeneralSettings>(source)?,
        ))
    }
}

/// Resolve every field in `R`'s address table, then construct `R`.
pub fn resolve_record<R: Record>(source: &LayeredSource) -> Result<R, ConfigError> {
    let mut fields = RawFields::new(R::SECTION);

    for spec in R::FIELDS {
        let (raw, layer) = source.resolve_with_layer(R::SECTION, spec.key)?;
        debug!(section = R::SECTION, key = spec.key, %layer, "Resolved parameter");
        fields.insert(spec.key, spec.transform.apply(raw));
    }

    Ok(R::from_raw(&fields)?)
}
