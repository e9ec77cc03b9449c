//! mapchip-export - PyxelEdit tilemap converter
//!
//! Converts a PyxelEdit tilemap export (.xml or .json) to the FEBuilder
//! MAPCHIP_CONFIG binary, merging terrain and palette attributes from a
//! .tmx sheet with the same base name when one exists.

use anyhow::Result;
use clap::Parser;
use mapchip_common::GBA_MAP_FORMAT;
use std::path::PathBuf;

// Use modules from library
use mapchip_export::{convert, tilemap, tmx};

#[derive(Parser)]
#[command(name = "mapchip-export")]
#[command(about = "PyxelEdit tilemap to MAPCHIP_CONFIG converter")]
#[command(version)]
struct Cli {
    /// Tilemap exported from PyxelEdit (.xml or .json)
    input: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let grid = tilemap::load_tilemap(&cli.input)?;
    tracing::info!(
        "Loaded {}×{} tilemap ({}×{} px tiles)",
        grid.tiles_wide,
        grid.tiles_high,
        grid.tile_width,
        grid.tile_height
    );

    let attributes_path = cli.input.with_extension(GBA_MAP_FORMAT.attributes_ext);
    let attrs = if attributes_path.exists() {
        tmx::load_attribute_sheet(&attributes_path)?
    } else {
        tracing::info!("Terrain and palette will be defaulted to 0x00");
        tmx::AttributeSheet::default()
    };

    let output = cli.input.with_extension(GBA_MAP_FORMAT.config_ext);
    tracing::info!("Converting {:?} -> {:?}", cli.input, output);
    convert::convert_map(&grid, &attrs, &output)?;

    println!("Done...");
    Ok(())
}
