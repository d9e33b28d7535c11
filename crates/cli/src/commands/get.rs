//! `get`: resolve one raw value and report which layer supplied it.

use anyhow::{Context, Result};
use d4lf_config::ConfigLoader;

pub fn run(loader: &ConfigLoader, section: &str, key: &str) -> Result<()> {
    let source = loader
        .read_source()
        .context("Failed to read parameter files")?;
    let (value, layer) = source.resolve_with_layer(section, key)?;

    println!("{}.{} = {} ({})", section, key, value, layer);
    Ok(())
}
