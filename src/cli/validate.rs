//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ValidateArgs {
    /// Config file to check
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let cfg = crate::config::load_config_file(&args.path)?;
    println!("OK: mode={}, {} video types", cfg.mode, cfg.video_types.len());
    Ok(())
}
