use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use crate::application::config::RunConfig;
use crate::application::palette_service::PaletteService;
use crate::cli::Cli;
use crate::infrastructure::file_storage::LocalFileStorage;
use crate::infrastructure::image_processor::DefaultImageProcessor;

mod application;
mod cli;
mod domain;
mod infrastructure;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config: RunConfig = Cli::parse().into();
    log::debug!("Running with {:?}", config);

    let service = PaletteService::new(
        Arc::new(DefaultImageProcessor::new()),
        Arc::new(LocalFileStorage::new()),
        config.layout,
    );
    service
        .run(&config.input_dir, &config.outputs)
        .with_context(|| format!("Palette run over {} failed", config.input_dir.display()))?;
    Ok(())
}
