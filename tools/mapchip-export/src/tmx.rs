//! TMX attribute-sheet loading
//!
//! A Tiled TMX file sharing the tilemap's base name can supply per-quadrant
//! palette and terrain classes through two specially named tilesets,
//! `paletteData` and `terrainData`. Each tileset carries one entry per 2×2
//! tile block, in row-major order, with a `terrain="ul,ur,ll,lr"` corner
//! list.

use anyhow::{bail, Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Tileset name carrying per-quadrant terrain classes.
const TERRAIN_TILESET: &str = "terrainData";

/// Tileset name carrying per-quadrant palette classes.
const PALETTE_TILESET: &str = "paletteData";

/// Leading `<image>` and `<terraintypes>` children of each tileset; the
/// block entries start after them.
pub const RESERVED_TILESET_NODES: usize = 2;

/// Corner attribute classes of one 2×2 block (upper-left, upper-right,
/// lower-left, lower-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadCodes(pub [u8; 4]);

/// Attribute data merged into a conversion. Either half may be absent
/// independently of the other.
#[derive(Debug, Clone, Default)]
pub struct AttributeSheet {
    pub palette: Option<Vec<QuadCodes>>,
    pub terrain: Option<Vec<QuadCodes>>,
}

/// Load palette/terrain attributes from a TMX file.
///
/// Callers handle the missing-file case (the expected one) themselves; a
/// file that exists but does not parse is an error.
pub fn load_attribute_sheet(path: &Path) -> Result<AttributeSheet> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open attribute sheet: {:?}", path))?;
    parse_attribute_sheet(&text)
        .with_context(|| format!("Failed to parse attribute sheet: {:?}", path))
}

fn parse_attribute_sheet(text: &str) -> Result<AttributeSheet> {
    let mut reader = Reader::from_str(text);
    let mut sheet = AttributeSheet::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"tileset" => {
                let name = attr_value(&e, "name")?.unwrap_or_default();
                let cells = parse_tileset_cells(&mut reader)
                    .with_context(|| format!("in tileset {:?}", name))?;

                match name.as_str() {
                    TERRAIN_TILESET => {
                        tracing::info!("Terrain data found");
                        sheet.terrain = Some(cells);
                    }
                    PALETTE_TILESET => {
                        tracing::info!("Palette data found");
                        sheet.palette = Some(cells);
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(sheet)
}

/// Collect the `terrain` corner lists of one tileset's block entries.
///
/// Consumes events up to the tileset's closing tag, looking only at direct
/// children and skipping the leading [`RESERVED_TILESET_NODES`].
fn parse_tileset_cells(reader: &mut Reader<&[u8]>) -> Result<Vec<QuadCodes>> {
    let mut children: Vec<Option<String>> = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 0 {
                    children.push(attr_value(&e, "terrain")?);
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    children.push(attr_value(&e, "terrain")?);
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    break; // closing tag of the tileset itself
                }
                depth -= 1;
            }
            Event::Eof => bail!("unexpected end of file inside <tileset>"),
            _ => {}
        }
    }

    children
        .into_iter()
        .skip(RESERVED_TILESET_NODES)
        .enumerate()
        .map(|(i, terrain)| {
            let terrain =
                terrain.with_context(|| format!("entry {} has no terrain attribute", i))?;
            parse_quad_codes(&terrain)
                .with_context(|| format!("entry {} has a bad terrain attribute", i))
        })
        .collect()
}

fn parse_quad_codes(value: &str) -> Result<QuadCodes> {
    let mut codes = [0u8; 4];
    let mut parts = value.split(',');

    for code in codes.iter_mut() {
        let part = parts.next().context("expected four corner classes")?;
        *code = part
            .trim()
            .parse()
            .with_context(|| format!("invalid corner class {:?}", part))?;
    }

    Ok(QuadCodes(codes))
}

fn attr_value(e: &BytesStart, name: &str) -> Result<Option<String>> {
    Ok(e.try_get_attribute(name)?
        .map(|a| a.unescape_value().map(|v| v.into_owned()))
        .transpose()?)
}
