//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn the store location flags into a `ConfigLoader`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use d4lf_config::ConfigLoader;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "d4lf-params")]
#[command(about = "Load the layered d4lf parameters and print them for inspection", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  d4lf-params show\n  d4lf-params show --format json\n  d4lf-params get general profiles\n  d4lf-params --override ./my-params.toml show\n  d4lf-params paths\n"
)]
pub struct Cli {
    /// Bundled defaults file (default: ./config/params.toml)
    #[arg(long = "base", global = true, env = "D4LF_BASE_PARAMS", value_name = "FILE")]
    pub base_path: Option<PathBuf>,

    /// User override file (default: ~/.d4lf/params.toml)
    #[arg(
        long = "override",
        global = true,
        env = "D4LF_OVERRIDE_PARAMS",
        value_name = "FILE"
    )]
    pub override_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load every record and print it (the default command)
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print one resolved raw value and the layer that supplied it
    Get {
        /// Section name (e.g. general)
        section: String,

        /// Key name (e.g. profiles)
        key: String,
    },

    /// Print the store locations and whether each one is used
    Paths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Build the loader, ignoring blank path values so env fallbacks can be unset with "".
    pub fn loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new();
        if let Some(path) = non_blank_path(self.base_path.as_deref()) {
            loader = loader.with_base_path(path.to_path_buf());
        }
        if let Some(path) = non_blank_path(self.override_path.as_deref()) {
            loader = loader.with_override_path(path.to_path_buf());
        }
        loader
    }
}

fn non_blank_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.to_string_lossy().trim().is_empty())
}
