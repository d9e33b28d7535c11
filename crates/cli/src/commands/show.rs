//! `show`: load every record and print it.

use anyhow::{Context, Result};
use d4lf_config::{ConfigFacade, ConfigLoader};

use crate::args::OutputFormat;
use crate::formatters::render_text;

pub fn run(loader: ConfigLoader, format: OutputFormat) -> Result<()> {
    let facade = ConfigFacade::new(loader);
    let settings = facade.settings().context("Failed to load parameters")?;

    match format {
        OutputFormat::Text => print!("{}", render_text(settings)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(settings)?),
    }
    Ok(())
}
