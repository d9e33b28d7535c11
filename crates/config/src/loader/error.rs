//! Error types for parameter loading.
//!
//! Responsibilities:
//! - Define error variants for every loading failure (missing file, bad store, missing key).
//! - Define `ValidationError` raised by record construction.
//!
//! Does NOT handle:
//! - Deciding how the process reacts to an error (the binary maps errors to exit codes).
//!
//! Invariants:
//! - All error variants include context for diagnosis (paths, section/key, received value).
//! - No variant is ever recovered inside the library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during parameter loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Default parameters not found at {path}: {source}")]
    MissingResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read override parameters at {path}: {source}")]
    OverrideUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse parameters file at {path}: {message}")]
    StoreParse { path: PathBuf, message: String },

    #[error("Key '{key}' not found in section '{section}'")]
    MissingKey { section: String, key: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A resolved raw value that failed a field's validation rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {section}.{key}: '{value}' ({reason})")]
pub struct ValidationError {
    /// Section of the offending field.
    pub section: String,
    /// Key of the offending field.
    pub key: String,
    /// The raw value that was received.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl ValidationError {
    pub fn new(
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
