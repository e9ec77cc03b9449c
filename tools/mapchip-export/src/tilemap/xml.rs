//! PyxelEdit XML tilemap loading

use super::types::{TileGrid, TileRecord};
use anyhow::{bail, Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Load a PyxelEdit XML export.
///
/// Tiles are taken from the first `<layer>` in document order; the per-tile
/// `x`/`y` attributes are redundant with that order and not read.
pub fn load_xml_tilemap(path: &Path) -> Result<TileGrid> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open tilemap: {:?}", path))?;
    parse_xml_tilemap(&text).with_context(|| format!("Failed to parse tilemap: {:?}", path))
}

fn parse_xml_tilemap(text: &str) -> Result<TileGrid> {
    let mut reader = Reader::from_str(text);

    let mut header: Option<(usize, usize, u32, u32)> = None;
    let mut tiles = Vec::new();
    let mut in_layer = false;
    let mut layer_done = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"tilemap" => header = Some(parse_map_attrs(&e)?),
                b"layer" if !layer_done => in_layer = true,
                b"tile" if in_layer => tiles.push(parse_tile(&e)?),
                _ => {}
            },
            Event::Empty(e) => {
                if e.name().as_ref() == b"tile" && in_layer {
                    tiles.push(parse_tile(&e)?);
                }
            }
            Event::End(e) => {
                // Only the base layer is converted
                if e.name().as_ref() == b"layer" && in_layer {
                    in_layer = false;
                    layer_done = true;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let (tiles_wide, tiles_high, tile_width, tile_height) =
        header.context("missing <tilemap> element")?;

    Ok(TileGrid {
        tiles_wide,
        tiles_high,
        tile_width,
        tile_height,
        tiles,
    })
}

fn parse_map_attrs(e: &BytesStart) -> Result<(usize, usize, u32, u32)> {
    Ok((
        req_attr(e, "tileswide")?.parse().context("invalid tileswide")?,
        req_attr(e, "tileshigh")?.parse().context("invalid tileshigh")?,
        req_attr(e, "tilewidth")?.parse().context("invalid tilewidth")?,
        req_attr(e, "tileheight")?.parse().context("invalid tileheight")?,
    ))
}

fn parse_tile(e: &BytesStart) -> Result<TileRecord> {
    // `index` is the chipset reference in the XML dialect
    let chip = req_attr(e, "index")?.parse().context("invalid tile index")?;
    let flip_x = parse_bool(&req_attr(e, "flipX")?)?;
    let rot = req_attr(e, "rot")?.parse().context("invalid tile rot")?;

    Ok(TileRecord { chip, flip_x, rot })
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => bail!("invalid boolean attribute: {:?}", value),
    }
}

fn req_attr(e: &BytesStart, name: &str) -> Result<String> {
    let attr = e.try_get_attribute(name)?.with_context(|| {
        format!(
            "missing {:?} attribute on <{}>",
            name,
            String::from_utf8_lossy(e.name().as_ref())
        )
    })?;
    Ok(attr.unescape_value()?.into_owned())
}
