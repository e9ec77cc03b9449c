//! mapchip-export library
//!
//! Provides tilemap conversion functions for use by other tools and the
//! integration tests.

pub mod convert;
pub mod tilemap;
pub mod tmx;

// Re-export the conversion entry points
pub use convert::{convert_map, encode_chip_codes, pack_terrain};

// Re-export loader types
pub use tilemap::{load_tilemap, TileGrid, TileRecord};
pub use tmx::{load_attribute_sheet, AttributeSheet, QuadCodes};
