//! Command-line interface for video-config
//!
//! Provides `show`, `types` and `validate` subcommands.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::domain::{AppConfig, Mode};

mod show;
mod types;
mod validate;

/// Inspect the video mode and category configuration
#[derive(Parser)]
#[command(name = "video-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration
    Show(show::ShowArgs),

    /// List the categories selectable in a mode
    Types(types::TypesArgs),

    /// Check a config file for errors
    Validate(validate::ValidateArgs),
}

/// Where to look for an override file.
#[derive(Args)]
pub struct SourceArgs {
    /// Explicit override file (TOML, YAML or JSON)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory searched for video-config.{toml,yaml,yml,json}
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

impl SourceArgs {
    pub fn load(&self) -> Result<AppConfig> {
        crate::config::load_config(&self.root, self.config.as_deref())
    }
}

pub(crate) fn parse_mode(raw: &str) -> Result<Mode, crate::error::ConfigError> {
    raw.parse()
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; otherwise WARN, or DEBUG with --verbose.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Types(args) => types::run(args),
        Commands::Validate(args) => validate::run(args),
    }
}
