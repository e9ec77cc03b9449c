//! Tilemap loader (PyxelEdit XML/JSON exports -> [`TileGrid`])

mod json;
mod types;
mod xml;

// Re-export public API
pub use json::load_json_tilemap;
pub use types::{TileGrid, TileRecord};
pub use xml::load_xml_tilemap;

use anyhow::{bail, Result};
use mapchip_common::GBA_MAP_FORMAT;
use std::path::Path;

/// Load a tilemap export, dispatching on the file extension.
///
/// The returned grid is guaranteed to hold exactly
/// `tiles_wide × tiles_high` records.
pub fn load_tilemap(path: &Path) -> Result<TileGrid> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    let grid = match ext.as_str() {
        e if e == GBA_MAP_FORMAT.tilemap_xml_ext => load_xml_tilemap(path)?,
        e if e == GBA_MAP_FORMAT.tilemap_json_ext => load_json_tilemap(path)?,
        _ => bail!(
            "Unsupported tilemap format: {:?} (use .xml or .json)",
            path
        ),
    };

    let expected = grid.tiles_wide * grid.tiles_high;
    if grid.tiles.len() != expected {
        bail!(
            "Tilemap {:?} holds {} tiles, expected {}×{} = {}",
            path,
            grid.tiles.len(),
            grid.tiles_wide,
            grid.tiles_high,
            expected
        );
    }

    Ok(grid)
}
