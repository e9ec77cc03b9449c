//! Map format specification for the conversion pipeline.
//!
//! This module defines the `MapFormat` struct which serves as the single source
//! of truth for the file extensions shared between the converter, its tilemap
//! inputs, and the attribute sheet.
//!
//! # Example
//!
//! ```
//! use mapchip_common::GBA_MAP_FORMAT;
//!
//! // Output file extension
//! assert_eq!(GBA_MAP_FORMAT.config_ext, "MAPCHIP_CONFIG");
//!
//! // Attribute sheet extension
//! assert_eq!(GBA_MAP_FORMAT.attributes_ext, "tmx");
//! ```

/// Map format specification for a target ROM editor.
///
/// Defines the file extensions used to derive sibling paths from an input
/// tilemap. There is one static `MapFormat` instance per supported target.
#[derive(Debug, Clone, Copy)]
pub struct MapFormat {
    /// Output chip-config extension without dot (e.g., "MAPCHIP_CONFIG")
    pub config_ext: &'static str,

    /// PyxelEdit XML tilemap extension (e.g., "xml")
    pub tilemap_xml_ext: &'static str,

    /// PyxelEdit JSON tilemap extension (e.g., "json")
    pub tilemap_json_ext: &'static str,

    /// Tiled TMX attribute-sheet extension (e.g., "tmx")
    pub attributes_ext: &'static str,
}

impl MapFormat {
    /// Create a new map format specification.
    pub const fn new(
        config_ext: &'static str,
        tilemap_xml_ext: &'static str,
        tilemap_json_ext: &'static str,
        attributes_ext: &'static str,
    ) -> Self {
        Self {
            config_ext,
            tilemap_xml_ext,
            tilemap_json_ext,
            attributes_ext,
        }
    }
}

/// FEBuilder (GBA) map format specification.
///
/// This is the single source of truth for the conversion pipeline's extensions:
/// - Output: `.MAPCHIP_CONFIG`, written next to the input map (overwriting)
/// - Inputs: `.xml` / `.json` PyxelEdit exports
/// - Attributes: `.tmx` sheet sharing the input's base name
pub const GBA_MAP_FORMAT: MapFormat = MapFormat::new("MAPCHIP_CONFIG", "xml", "json", "tmx");
