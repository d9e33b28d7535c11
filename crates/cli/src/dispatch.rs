//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Mapping errors to exit codes (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands, OutputFormat};
use crate::commands;

/// Dispatch CLI commands to their respective handlers. `show` runs when no subcommand is given.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let loader = cli.loader();

    match cli.command {
        None => commands::show::run(loader, OutputFormat::Text),
        Some(Commands::Show { format }) => commands::show::run(loader, format),
        Some(Commands::Get { section, key }) => commands::get::run(&loader, &section, &key),
        Some(Commands::Paths) => commands::paths::run(&loader),
    }
}
