mod config;
mod report;
mod view;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use common::vfile::VFile;
use quake::prelude::*;

use crate::{config::ThumbnailConfig, view::TopDownView};

#[derive(Parser)]
#[command(
    name = "bsp-thumbnail",
    about = "Prepare a top-down thumbnail of a Quake BSP map",
    version
)]
struct Cli {
    /// Map file (.bsp)
    file: PathBuf,
    /// Print the lump directory and entities instead of the thumbnail summary
    #[arg(short, long)]
    list: bool,
    /// Model to frame, overriding the config file
    #[arg(short, long)]
    model: Option<usize>,
    /// Settings file
    #[arg(short, long, default_value = "thumbnail.ini")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ThumbnailConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(model) = cli.model {
        config.model = model;
    }

    let file = VFile::open(&cli.file).map_err(|source| BspError::Open {
        path: cli.file.clone(),
        source,
    })?;
    let document = BspDocument::from_bytes_with(&file.data, config.options)
        .with_context(|| format!("Failed to decode {}", cli.file.display()))?;

    if cli.list {
        print!("{}", report::listing(&document)?);
        return Ok(());
    }

    let view = TopDownView::new(&document, config.model)
        .with_context(|| format!("Failed to frame model {}", config.model))?;
    print!("{}", report::summary(file.len(), &document, &view)?);

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn arguments() {
        let cli = Cli::parse_from(["bsp-thumbnail", "-l", "-m", "3", "start.bsp"]);
        assert!(cli.list);
        assert_eq!(cli.model, Some(3));
        assert_eq!(cli.file, PathBuf::from("start.bsp"));
        assert_eq!(cli.config, PathBuf::from("thumbnail.ini"));

        assert!(Cli::try_parse_from(["bsp-thumbnail"]).is_err());
    }
}
