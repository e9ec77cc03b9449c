//! PyxelEdit JSON tilemap loading

use super::types::{TileGrid, TileRecord};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct JsonMap {
    tileswide: usize,
    tileshigh: usize,
    tilewidth: u32,
    tileheight: u32,
    layers: Vec<JsonLayer>,
}

#[derive(Deserialize)]
struct JsonLayer {
    tiles: Vec<JsonTile>,
}

/// One tile entry. `tile` is the chipset reference in the JSON dialect; the
/// `index` field is the cell position, already implied by document order,
/// and is not read.
#[derive(Deserialize)]
struct JsonTile {
    tile: i32,
    #[serde(rename = "flipX")]
    flip_x: bool,
    rot: u8,
}

/// Load a PyxelEdit JSON export.
///
/// Tiles are taken from the first layer in document order.
pub fn load_json_tilemap(path: &Path) -> Result<TileGrid> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open tilemap: {:?}", path))?;
    parse_json_tilemap(&text).with_context(|| format!("Failed to parse tilemap: {:?}", path))
}

fn parse_json_tilemap(text: &str) -> Result<TileGrid> {
    let map: JsonMap = serde_json::from_str(text)?;
    let layer = map.layers.first().context("tilemap has no layers")?;

    let mut tiles = Vec::with_capacity(layer.tiles.len());
    for t in &layer.tiles {
        // PyxelEdit writes -1 for unpainted cells; there is no chip for those
        let chip = u16::try_from(t.tile)
            .with_context(|| format!("chipset index {} out of range", t.tile))?;
        tiles.push(TileRecord {
            chip,
            flip_x: t.flip_x,
            rot: t.rot,
        });
    }

    Ok(TileGrid {
        tiles_wide: map.tileswide,
        tiles_high: map.tileshigh,
        tile_width: map.tilewidth,
        tile_height: map.tileheight,
        tiles,
    })
}
