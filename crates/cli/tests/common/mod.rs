//! Shared test utilities for d4lf-params integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that never reads the host's parameter files.
//! - Provide temporary base/override files for individual scenarios.
//!
//! Invariants / Assumptions:
//! - `HOME` points at a fresh temp directory, so the default override location is empty.
//! - `D4LF_BASE_PARAMS` / `D4LF_OVERRIDE_PARAMS` are cleared unless a test sets them.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// The bundled defaults shipped at the workspace root.
pub fn bundled_base() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/params.toml")
}

/// Returns a hermetic `d4lf-params` command whose home directory is `home`.
pub fn params_cmd(home: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("d4lf-params");

    cmd.env("HOME", home)
        .env_remove("D4LF_BASE_PARAMS")
        .env_remove("D4LF_OVERRIDE_PARAMS")
        .env_remove("RUST_LOG");

    cmd
}

/// Temporary parameter files for a single test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    /// Write a base store and return its path.
    pub fn base(&self, text: &str) -> PathBuf {
        let path = self.dir.path().join("config").join("params.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, text).unwrap();
        path
    }

    /// Write the override store at the default location under `home()`.
    pub fn user_override(&self, text: &str) -> PathBuf {
        let path = self.home().join(".d4lf").join("params.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, text).unwrap();
        path
    }

    /// A command with `HOME` pointing at this workspace and no `--base` argument.
    #[allow(dead_code)]
    pub fn bare_cmd(&self) -> Command {
        fs::create_dir_all(self.home()).unwrap();
        params_cmd(&self.home())
    }

    /// A command with `HOME` pointing at this workspace and `--base` at the bundled defaults.
    pub fn cmd(&self) -> Command {
        fs::create_dir_all(self.home()).unwrap();
        let mut cmd = params_cmd(&self.home());
        cmd.arg("--base").arg(bundled_base());
        cmd
    }
}
