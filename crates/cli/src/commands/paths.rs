//! `paths`: show where the stores are read from.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Result;
use d4lf_config::ConfigLoader;

pub fn run(loader: &ConfigLoader) -> Result<()> {
    let base = loader.base_path();
    println!("base:     {} ({})", base.display(), base_status(base));

    match loader.override_path() {
        Some(overrides) => println!(
            "override: {} ({})",
            overrides.display(),
            override_status(&overrides)
        ),
        None => println!("override: no home directory (unavailable, ignored)"),
    }
    Ok(())
}

fn base_status(path: &Path) -> &'static str {
    if path.is_file() { "present" } else { "missing" }
}

/// Mirrors how the loader treats the override file.
fn override_status(path: &Path) -> &'static str {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => "used",
        Ok(_) => "empty, ignored",
        Err(e) if e.kind() == ErrorKind::NotFound => "absent, ignored",
        Err(_) => "unreadable",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_status() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("params.toml");

        assert_eq!(override_status(&file), "absent, ignored");

        fs::write(&file, "").unwrap();
        assert_eq!(override_status(&file), "empty, ignored");

        fs::write(&file, "[char]\ninventory = \"i\"\n").unwrap();
        assert_eq!(override_status(&file), "used");

        // A regular file used as a directory fails with something other than NotFound
        assert_eq!(override_status(&file.join("params.toml")), "unreadable");
    }
}
