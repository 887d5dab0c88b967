use std::io;

use anyhow::{Context, Result};
use log::{debug, info};

use surface_mapper::config::Config;
use surface_mapper::io::{open_source, GridReader, GridWriter};
use surface_mapper::map_surface;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(std::env::args().skip(1))?;
    let name = config.source.name();
    info!("surveying {} at flood level {}", name, config.flood_level.0);

    let (mut grid, origin) = GridReader::new(open_source(&config.source)?, name.as_str())
        .read()
        .with_context(|| format!("failed to load grid from {}", name))?;

    let survey = map_surface(&mut grid, origin, config.flood_level)
        .with_context(|| format!("failed to map {}", name))?;
    debug!("survey: {}", serde_json::to_string(&survey)?);
    info!(
        "{} buildable cells, {} dry cells out of reach",
        survey.buildable, survey.stranded
    );

    GridWriter::new(io::stdout().lock())
        .write(&grid)
        .context("failed to write mapped grid")?;
    Ok(())
}
