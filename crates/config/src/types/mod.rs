//! Record schemas for the d4lf parameters.
//!
//! Responsibilities:
//! - Define one validated record per section (`AdvancedOptions`, `CharSettings`, `GeneralSettings`).
//! - Declare each record's address table and raw-value transforms (`Record`).
//! - Define the value types those records are built from (hotkeys, enumerations).
//!
//! Does NOT handle:
//! - Reading stores or resolving keys (see `source` and `loader`).
//!
//! Invariants:
//! - Records are immutable once built; fields are private behind accessors.
//! - Construction validates every field and stops at the first invalid one.

mod advanced;
mod character;
mod general;
pub mod hotkey;
mod record;
mod settings;
mod values;

pub use advanced::AdvancedOptions;
pub use character::CharSettings;
pub use general::GeneralSettings;
pub use hotkey::{HotKey, HotKeyError, KeyCode, Modifiers};
pub use record::{FieldSpec, RawFields, RawValue, Record, Transform};
pub use settings::Settings;
pub use values::{HandleRares, KeepAspects, LogLevel};
