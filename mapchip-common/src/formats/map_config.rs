//! MAPCHIP_CONFIG binary layout (.MAPCHIP_CONFIG)
//!
//! Chip layout for one map, consumed by FEBuilder's map editor.
//! POD format - no magic bytes, no header, no checksum.
//!
//! # Layout
//! ```text
//! 0x0000: chip codes, (tiles_wide/2) × (tiles_high/2) × 4 u16 LE
//!         (8192 bytes for the standard 64×64 map)
//! 0x2000: terrain bytes, always exactly 1024
//! ```
//!
//! For the chip-code bit fields, see [`super::chip`].

use anyhow::Result;
use std::io::Write;

/// Standard map width in sub-tiles.
pub const MAP_TILES_WIDE: usize = 64;

/// Standard map height in sub-tiles.
pub const MAP_TILES_HIGH: usize = 64;

/// Chip codes in a standard map.
pub const CHIP_CODES_PER_MAP: usize = MAP_TILES_WIDE * MAP_TILES_HIGH;

/// Length of the trailing terrain block, fixed regardless of map dimensions.
pub const TERRAIN_BLOCK_LEN: usize = 1024;

/// Total file size for a standard 64×64 map.
pub const MAP_CONFIG_LEN: usize = CHIP_CODES_PER_MAP * 2 + TERRAIN_BLOCK_LEN;

/// Write a complete MAPCHIP_CONFIG file
///
/// Chip codes first (little-endian u16 each), then the terrain block.
pub fn write_map_config<W: Write>(w: &mut W, chip_codes: &[u16], terrain: &[u8]) -> Result<()> {
    if terrain.len() != TERRAIN_BLOCK_LEN {
        anyhow::bail!(
            "Terrain block is {} bytes, expected {}",
            terrain.len(),
            TERRAIN_BLOCK_LEN
        );
    }

    for code in chip_codes {
        w.write_all(&code.to_le_bytes())?;
    }
    w.write_all(terrain)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_map_constants() {
        assert_eq!(CHIP_CODES_PER_MAP, 4096);
        assert_eq!(MAP_CONFIG_LEN, 9216);
    }

    #[test]
    fn test_chip_codes_are_little_endian() {
        let mut out = Vec::new();
        write_map_config(&mut out, &[0x0001, 0x530F], &[0u8; TERRAIN_BLOCK_LEN]).unwrap();
        assert_eq!(&out[0..4], &[0x01, 0x00, 0x0F, 0x53]);
    }

    #[test]
    fn test_standard_map_output_size() {
        let codes = vec![0u16; CHIP_CODES_PER_MAP];
        let terrain = vec![0u8; TERRAIN_BLOCK_LEN];
        let mut out = Vec::new();
        write_map_config(&mut out, &codes, &terrain).unwrap();
        assert_eq!(out.len(), MAP_CONFIG_LEN);
    }

    #[test]
    fn test_terrain_follows_chip_codes() {
        let mut terrain = vec![0u8; TERRAIN_BLOCK_LEN];
        terrain[0] = 3;
        terrain[1023] = 1;

        let mut out = Vec::new();
        write_map_config(&mut out, &[0xABCD], &terrain).unwrap();
        assert_eq!(out.len(), 2 + TERRAIN_BLOCK_LEN);
        assert_eq!(out[2], 3);
        assert_eq!(out[2 + 1023], 1);
    }

    #[test]
    fn test_rejects_wrong_terrain_block_len() {
        let mut out = Vec::new();
        assert!(write_map_config(&mut out, &[], &[0u8; 16]).is_err());
    }
}
