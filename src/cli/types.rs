//! Types command implementation

use anyhow::Result;
use clap::Args;

use super::{parse_mode, SourceArgs};
use crate::domain::{AppConfig, Mode, VideoTypeEntry};

#[derive(Args)]
pub struct TypesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// List categories for this mode instead of the configured one
    #[arg(short, long, value_name = "MODE", value_parser = parse_mode)]
    pub mode: Option<Mode>,

    /// List every category regardless of mode
    #[arg(long, conflicts_with = "mode")]
    pub all: bool,
}

pub fn run(args: TypesArgs) -> Result<()> {
    let mut cfg = args.source.load()?;
    if let Some(mode) = args.mode {
        cfg = cfg.with_mode(mode);
    }

    for entry in listed(&cfg, args.all) {
        println!("{}\t{}", entry.value, entry.label);
    }
    Ok(())
}

fn listed(cfg: &AppConfig, all: bool) -> Vec<&VideoTypeEntry> {
    if all {
        cfg.video_types.iter().collect()
    } else {
        cfg.selectable_types()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_config;

    #[test]
    fn test_listed_respects_all_flag() {
        assert_eq!(listed(get_config(), false).len(), 1);
        assert_eq!(listed(get_config(), true).len(), get_config().video_types.len());
    }
}
