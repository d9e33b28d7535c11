//! Layered parameter loading for d4lf.
//!
//! This crate resolves the application parameters from the bundled defaults
//! (`./config/params.toml`) and an optional user override
//! (`~/.d4lf/params.toml`) into validated, strongly-typed records.

pub mod constants;
mod facade;
mod loader;
pub mod paths;
pub mod source;
pub mod store;
pub mod types;

pub use facade::ConfigFacade;
pub use loader::{ConfigError, ConfigLoader, ValidationError, resolve_record};
pub use source::{Layer, LayeredSource};
pub use store::KeyValueStore;
pub use types::{
    AdvancedOptions, CharSettings, GeneralSettings, HandleRares, HotKey, KeepAspects, LogLevel,
    Record, Settings,
};
