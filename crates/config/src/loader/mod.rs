//! Parameter resolver and its error types.
//!
//! Responsibilities:
//! - Load the base and override stores and build every record (`ConfigLoader`).
//! - Define the error taxonomy shared by the whole crate.
//!
//! Does NOT handle:
//! - Caching loaded settings (see `facade.rs`).
//! - Terminating the process; callers decide what to do with an error.
//!
//! Invariants / Assumptions:
//! - Override values take precedence over base values.
//! - A load either yields every record or an error naming the offending key/field.

mod builder;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, resolve_record};
pub use error::{ConfigError, ValidationError};
