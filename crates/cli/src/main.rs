//! d4lf-params - diagnostic entry point for the layered d4lf parameters.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the parameters through `d4lf-config` and print them for inspection.
//! - Terminate with a structured exit code when loading fails.
//!
//! Does NOT handle:
//! - Parameter resolution or validation (see `crates/config`).
//!
//! Invariants:
//! - Logging goes to stderr so stdout only carries the requested output.
//! - This is the only place a configuration error turns into a process exit.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use d4lf_config::ConfigError;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            log_failure(&e);
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Emit a structured log event naming the offending key or field.
fn log_failure(err: &anyhow::Error) {
    match err.chain().find_map(|c| c.downcast_ref::<ConfigError>()) {
        Some(ConfigError::MissingKey { section, key }) => {
            tracing::error!(%section, %key, "Required parameter missing");
        }
        Some(ConfigError::Validation(v)) => {
            tracing::error!(
                section = %v.section,
                key = %v.key,
                value = %v.value,
                reason = %v.reason,
                "Invalid parameter value"
            );
        }
        Some(other) => tracing::error!(error = %other, "Failed to load parameters"),
        None => tracing::debug!(error = %err, "Command failed"),
    }
}
