//! video-config: inspect and validate the video category configuration

use anyhow::Result;

fn main() -> Result<()> {
    video_config::cli::run()
}
