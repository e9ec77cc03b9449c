//! MAPCHIP_CONFIG binary format
//!
//! POD format for FEBuilder map chip layouts. No magic bytes - the format is
//! determined by the file extension (see [`crate::map_format::GBA_MAP_FORMAT`]).

pub mod chip;
pub mod map_config;

pub use chip::*;
pub use map_config::*;
