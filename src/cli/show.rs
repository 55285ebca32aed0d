//! Show command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};

use super::SourceArgs;
use crate::domain::AppConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
    Yaml,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let cfg = args.source.load()?;
    println!("{}", render(&cfg, args.format)?.trim_end());
    Ok(())
}

pub fn render(cfg: &AppConfig, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(cfg)?,
        OutputFormat::Toml => toml::to_string_pretty(cfg)?,
        OutputFormat::Yaml => serde_yaml::to_string(cfg)?,
    };
    Ok(out)
}
