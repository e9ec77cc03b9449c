//! Shared types and utilities for the mapchip tools
//!
//! This crate provides the format definitions shared between:
//! - `mapchip-export` (tilemap converter CLI)
//! - downstream tooling that re-reads MAPCHIP_CONFIG output
//!
//! # Modules
//!
//! - [`formats`] - MAPCHIP_CONFIG binary layout and chip-code bit fields
//! - [`map_format`] - file-extension constants for the conversion pipeline

pub mod formats;
pub mod map_format;

// Re-export commonly used format items
pub use formats::{
    chip_code, orientation_bits, palette_bits, write_map_config, CHIP_CODES_PER_MAP, CHIP_HFLIP,
    CHIP_VFLIP, MAP_CONFIG_LEN, MAP_TILES_HIGH, MAP_TILES_WIDE, MAX_PALETTE_CODE, PALETTE_SHIFT,
    TERRAIN_BLOCK_LEN,
};
pub use map_format::{MapFormat, GBA_MAP_FORMAT};
