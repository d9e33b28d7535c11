//! Path helpers for parameter store locations.
//!
//! Responsibilities:
//! - Determine the bundled base store path and the per-user override path.
//! - Use `directories` crate for the platform home directory.
//!
//! Does NOT handle:
//! - File I/O operations (see `store.rs`).

use std::path::{Path, PathBuf};

use crate::constants::{BASE_CONFIG_DIR, PARAMS_FILE_NAME, USER_CONFIG_DIR};

/// Returns the path of the bundled defaults, relative to the working directory.
///
/// `./config/params.toml`
pub fn default_base_path() -> PathBuf {
    PathBuf::from(".").join(BASE_CONFIG_DIR).join(PARAMS_FILE_NAME)
}

/// Returns the path of the user override store.
///
/// - Linux/macOS: `~/.d4lf/params.toml`
/// - Windows: `%USERPROFILE%\.d4lf\params.toml`
///
/// `None` when no home directory can be determined; there is then no override layer.
pub fn default_override_path() -> Option<PathBuf> {
    let base_dirs = directories::BaseDirs::new();
    override_path_in(base_dirs.as_ref().map(directories::BaseDirs::home_dir))
}

fn override_path_in(home: Option<&Path>) -> Option<PathBuf> {
    home.map(|home| home.join(USER_CONFIG_DIR).join(PARAMS_FILE_NAME))
}
