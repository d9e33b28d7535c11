//! Lazily-loaded, cached access to the resolved settings.
//!
//! Responsibilities:
//! - Run the resolver on first access and cache the snapshot for the facade's lifetime.
//! - Expose one accessor per record, all reading the same snapshot.
//!
//! Does NOT handle:
//! - Process-wide storage; callers own the facade (a `static` works when they need one).
//! - Reloading; a loaded facade never reads the stores again.
//!
//! Invariants:
//! - At most one successful load per facade, even under concurrent first access.
//! - A failed load leaves the facade unloaded and returns the error to the caller.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::loader::{ConfigError, ConfigLoader};
use crate::types::{AdvancedOptions, CharSettings, GeneralSettings, Settings};

/// Caller-owned, load-once holder for `Settings`.
#[derive(Debug)]
pub struct ConfigFacade {
    loader: ConfigLoader,
    settings: OnceLock<Settings>,
    load_lock: Mutex<()>,
    loads: AtomicUsize,
}

impl Default for ConfigFacade {
    fn default() -> Self {
        Self::new(ConfigLoader::new())
    }
}

impl ConfigFacade {
    /// Create an unloaded facade; nothing is read until the first accessor call.
    pub const fn new(loader: ConfigLoader) -> Self {
        Self {
            loader,
            settings: OnceLock::new(),
            load_lock: Mutex::new(()),
            loads: AtomicUsize::new(0),
        }
    }

    /// The full snapshot, loading it first if needed.
    pub fn settings(&self) -> Result<&Settings, ConfigError> {
        if let Some(settings) = self.settings.get() {
            return Ok(settings);
        }

        let _guard = self
            .load_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Another thread may have finished loading while we waited
        if let Some(settings) = self.settings.get() {
            return Ok(settings);
        }

        let loaded = self.loader.load()?;
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.settings.get_or_init(|| loaded))
    }

    /// Force the load now instead of on first access.
    pub fn load(&self) -> Result<(), ConfigError> {
        self.settings().map(|_| ())
    }

    pub fn advanced_options(&self) -> Result<&AdvancedOptions, ConfigError> {
        self.settings().map(Settings::advanced_options)
    }

    pub fn char(&self) -> Result<&CharSettings, ConfigError> {
        self.settings().map(Settings::char)
    }

    pub fn general(&self) -> Result<&GeneralSettings, ConfigError> {
        self.settings().map(Settings::general)
    }

    pub fn is_loaded(&self) -> bool {
        self.settings.get().is_some()
    }

    /// Number of completed loads; never exceeds one.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}
