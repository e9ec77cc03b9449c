//! Generated PyxelEdit/TMX fixtures for the integration tests

use std::fmt::Write as _;
use std::path::Path;

/// Write a `wide`×`high` PyxelEdit XML export where every cell uses the same
/// chip, flip and rotation state.
pub fn write_xml_tilemap(
    path: &Path,
    wide: usize,
    high: usize,
    chip: u16,
    flip_x: bool,
    rot: u8,
) -> std::io::Result<()> {
    let mut xml = String::from("<?xml version=\"1.0\"?>\n");
    writeln!(
        xml,
        r#"<tilemap tileswide="{wide}" tileshigh="{high}" tilewidth="8" tileheight="8">"#
    )
    .unwrap();
    writeln!(xml, r#"  <layer number="0" name="base">"#).unwrap();
    for y in 0..high {
        for x in 0..wide {
            writeln!(
                xml,
                r#"    <tile x="{x}" y="{y}" index="{chip}" flipX="{flip_x}" rot="{rot}"/>"#
            )
            .unwrap();
        }
    }
    writeln!(xml, "  </layer>").unwrap();
    writeln!(xml, "</tilemap>").unwrap();

    std::fs::write(path, xml)
}

/// Write the JSON counterpart of [`write_xml_tilemap`].
pub fn write_json_tilemap(
    path: &Path,
    wide: usize,
    high: usize,
    chip: u16,
    flip_x: bool,
    rot: u8,
) -> std::io::Result<()> {
    let tiles: Vec<serde_json::Value> = (0..wide * high)
        .map(|i| {
            serde_json::json!({
                "x": i % wide,
                "y": i / wide,
                "index": i,
                "tile": chip,
                "flipX": flip_x,
                "rot": rot,
            })
        })
        .collect();

    let map = serde_json::json!({
        "tileshigh": high,
        "tileswide": wide,
        "tileheight": 8,
        "tilewidth": 8,
        "layers": [{"number": 0, "name": "base", "tiles": tiles}],
    });

    std::fs::write(path, serde_json::to_string_pretty(&map).unwrap())
}

/// Write a TMX attribute sheet carrying `paletteData` and `terrainData`
/// tilesets with the given per-block corner classes.
pub fn write_attribute_tmx(
    path: &Path,
    palette: &[[u8; 4]],
    terrain: &[[u8; 4]],
) -> std::io::Result<()> {
    let mut xml = String::from("<?xml version=\"1.0\"?>\n");
    writeln!(xml, r#"<map version="1.2" orientation="orthogonal">"#).unwrap();

    for (name, cells) in [("paletteData", palette), ("terrainData", terrain)] {
        writeln!(
            xml,
            r#"  <tileset firstgid="1" name="{name}" tilewidth="16" tileheight="16" tilecount="{}">"#,
            cells.len()
        )
        .unwrap();
        writeln!(
            xml,
            r#"    <image source="{name}.png" width="256" height="256"/>"#
        )
        .unwrap();
        writeln!(xml, "    <terraintypes>").unwrap();
        writeln!(xml, r#"      <terrain name="plains" tile="-1"/>"#).unwrap();
        writeln!(xml, "    </terraintypes>").unwrap();
        for (id, c) in cells.iter().enumerate() {
            writeln!(
                xml,
                r#"    <tile id="{id}" terrain="{},{},{},{}"/>"#,
                c[0], c[1], c[2], c[3]
            )
            .unwrap();
        }
        writeln!(xml, "  </tileset>").unwrap();
    }

    writeln!(xml, "</map>").unwrap();

    std::fs::write(path, xml)
}
