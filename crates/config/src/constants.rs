//! Centralized constants for the d4lf parameter loader.
//!
//! This module contains file locations and schema bounds used across the
//! crate to avoid magic values scattered through the resolver and records.

// =============================================================================
// Store Locations
// =============================================================================

/// File name shared by the bundled defaults and the user override.
pub const PARAMS_FILE_NAME: &str = "params.toml";

/// Directory (relative to the working directory) holding the bundled defaults.
pub const BASE_CONFIG_DIR: &str = "config";

/// Hidden directory under the user's home holding the override store.
pub const USER_CONFIG_DIR: &str = ".d4lf";

// =============================================================================
// Raw Value Transforms
// =============================================================================

/// Delimiter used by split fields (`scripts`, `profiles`, `check_chest_tabs`).
pub const LIST_DELIMITER: char = ',';

// =============================================================================
// Schema Bounds
// =============================================================================

/// Highest chest tab index that can be scanned.
pub const MAX_CHEST_TAB: u8 = 5;

/// Highest function key accepted in a hotkey (`f1`..`f24`).
pub const MAX_FUNCTION_KEY: u8 = 24;
