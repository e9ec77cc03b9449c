//! Tilemap conversion core ([`TileGrid`] + attributes -> MAPCHIP_CONFIG)

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mapchip_common::formats::chip::{self, ROT_270, ROT_90};
use mapchip_common::{write_map_config, TERRAIN_BLOCK_LEN};

use crate::tilemap::{TileGrid, TileRecord};
use crate::tmx::{AttributeSheet, QuadCodes};

/// Encode every even-aligned 2×2 block of the grid into four chip codes,
/// emitted upper-left, upper-right, lower-left, lower-right.
///
/// Blocks are visited in row-major order; a grid with an odd trailing row or
/// column silently drops it. `palette` holds one corner-class cell per block
/// when an attribute sheet was loaded.
pub fn encode_chip_codes(grid: &TileGrid, palette: Option<&[QuadCodes]>) -> Vec<u16> {
    let sheet_wide = grid.tiles_wide / 2;
    let mut codes = Vec::with_capacity(sheet_wide * (grid.tiles_high / 2) * 4);

    for scan_y in (0..grid.tiles_high.saturating_sub(1)).step_by(2) {
        for scan_x in (0..grid.tiles_wide.saturating_sub(1)).step_by(2) {
            let cell = palette.map(|cells| cells[scan_x / 2 + sheet_wide * (scan_y / 2)]);

            let quadrants = [
                (scan_x, scan_y),
                (scan_x + 1, scan_y),
                (scan_x, scan_y + 1),
                (scan_x + 1, scan_y + 1),
            ];

            for (quadrant, (x, y)) in quadrants.into_iter().enumerate() {
                let tile = grid.tile(x, y);
                let palette_bits = cell.map_or(0x0000, |c| quadrant_palette_bits(&c, quadrant, x, y));
                let orientation_bits = tile_orientation_bits(tile, x, y);
                codes.push(chip::chip_code(palette_bits, orientation_bits, tile.chip));
            }
        }
    }

    codes
}

/// Palette field for one quadrant, degrading unsupported classes to zero.
fn quadrant_palette_bits(cell: &QuadCodes, quadrant: usize, x: usize, y: usize) -> u16 {
    match chip::palette_bits(cell.0[quadrant]) {
        Some(bits) => bits,
        None => {
            tracing::warn!(
                "unsupported palette class {} at tile ({}, {}); defaulting to 0",
                cell.0[quadrant],
                x,
                y
            );
            0x0000
        }
    }
}

/// Orientation field for one tile, degrading unencodable states to zero.
fn tile_orientation_bits(tile: &TileRecord, x: usize, y: usize) -> u16 {
    match chip::orientation_bits(tile.flip_x, tile.rot) {
        Some(bits) => bits,
        None if tile.rot == ROT_90 || tile.rot == ROT_270 => {
            tracing::warn!(
                "rotated tile at ({}, {}); 90°/270° turns cannot be encoded",
                x,
                y
            );
            0x0000
        }
        None => {
            tracing::warn!(
                "unhandled orientation (flipX={}, rot={}) at ({}, {})",
                tile.flip_x,
                tile.rot,
                x,
                y
            );
            0x0000
        }
    }
}

/// Build the fixed-size terrain block: one byte per 2×2 block, taken from
/// each cell's upper-left corner class, zero-filled when the sheet is absent
/// or shorter than the block.
pub fn pack_terrain(terrain: Option<&[QuadCodes]>) -> Vec<u8> {
    let mut block = vec![0u8; TERRAIN_BLOCK_LEN];

    if let Some(cells) = terrain {
        for (byte, cell) in block.iter_mut().zip(cells) {
            *byte = cell.0[0];
        }
    }

    block
}

/// Convert a loaded tilemap to a MAPCHIP_CONFIG file, overwriting `output`.
pub fn convert_map(grid: &TileGrid, attrs: &AttributeSheet, output: &Path) -> Result<()> {
    let codes = encode_chip_codes(grid, attrs.palette.as_deref());
    let terrain = pack_terrain(attrs.terrain.as_deref());

    let file =
        File::create(output).with_context(|| format!("Failed to create output: {:?}", output))?;
    let mut writer = BufWriter::new(file);
    write_map_config(&mut writer, &codes, &terrain)?;
    writer.flush()?;

    tracing::info!(
        "Converted map: {} chip codes + {} terrain bytes",
        codes.len(),
        terrain.len()
    );

    Ok(())
}
