//! Packed chip-code bit fields
//!
//! Each map sub-tile ("chip") is stored as one 16-bit code:
//!
//! ```text
//! bits 12-14: palette/terrain class (0-4)
//! bit  11:    vertical flip
//! bit  10:    horizontal flip
//! bits 0-9:   chipset index
//! ```
//!
//! Fields are combined by plain addition, matching the editor pipeline this
//! format comes from: a chipset index at or above 0x0400 bleeds into the
//! flip bits and is written as-is.

/// Horizontal flip attribute bit.
pub const CHIP_HFLIP: u16 = 0x0400;

/// Vertical flip attribute bit.
pub const CHIP_VFLIP: u16 = 0x0800;

/// Bit position of the palette/terrain class field.
pub const PALETTE_SHIFT: u16 = 12;

/// Highest palette/terrain class the code can carry.
pub const MAX_PALETTE_CODE: u8 = 4;

/// PyxelEdit rotation states (clockwise quarter turns).
pub const ROT_NONE: u8 = 0;
pub const ROT_90: u8 = 1;
pub const ROT_180: u8 = 2;
pub const ROT_270: u8 = 3;

/// Flip attribute bits for a tile's flip/rotation state.
///
/// A 180° turn is expressible as a double flip. 90°/270° turns have no
/// chip-attribute encoding and return `None`, as does any rotation value
/// outside the editor's 0-3 range.
pub fn orientation_bits(flip_x: bool, rot: u8) -> Option<u16> {
    match (flip_x, rot) {
        (_, ROT_90) | (_, ROT_270) => None,
        (false, ROT_NONE) => Some(0x0000),
        (true, ROT_NONE) => Some(CHIP_HFLIP),
        (false, ROT_180) => Some(CHIP_HFLIP | CHIP_VFLIP),
        (true, ROT_180) => Some(CHIP_VFLIP),
        _ => None,
    }
}

/// Palette field bits for a terrain class, or `None` above [`MAX_PALETTE_CODE`].
pub fn palette_bits(code: u8) -> Option<u16> {
    if code <= MAX_PALETTE_CODE {
        Some(u16::from(code) << PALETTE_SHIFT)
    } else {
        None
    }
}

/// Assemble a chip code from its three fields.
///
/// Plain addition, not OR - the source tool adds the fields, and out-of-range
/// chipset indexes must collide with the attribute bits the same way.
pub fn chip_code(palette: u16, orientation: u16, chip_index: u16) -> u16 {
    palette + orientation + chip_index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_table() {
        // All 8 documented (flip_x, rot) pairs
        assert_eq!(orientation_bits(false, ROT_NONE), Some(0x0000));
        assert_eq!(orientation_bits(true, ROT_NONE), Some(0x0400));
        assert_eq!(orientation_bits(false, ROT_180), Some(0x0C00));
        assert_eq!(orientation_bits(true, ROT_180), Some(0x0800));
        assert_eq!(orientation_bits(false, ROT_90), None);
        assert_eq!(orientation_bits(true, ROT_90), None);
        assert_eq!(orientation_bits(false, ROT_270), None);
        assert_eq!(orientation_bits(true, ROT_270), None);
    }

    #[test]
    fn test_orientation_out_of_range_rotation() {
        assert_eq!(orientation_bits(false, 4), None);
        assert_eq!(orientation_bits(true, 0xFF), None);
    }

    #[test]
    fn test_palette_codes() {
        assert_eq!(palette_bits(0), Some(0x0000));
        assert_eq!(palette_bits(1), Some(0x1000));
        assert_eq!(palette_bits(2), Some(0x2000));
        assert_eq!(palette_bits(3), Some(0x3000));
        assert_eq!(palette_bits(4), Some(0x4000));
    }

    #[test]
    fn test_palette_codes_above_four_unsupported() {
        assert_eq!(palette_bits(5), None);
        assert_eq!(palette_bits(0xFF), None);
    }

    #[test]
    fn test_chip_code_assembly() {
        // Flipped 180° chip, index 0x005 -> 0x080D
        let orientation = orientation_bits(true, ROT_180).unwrap();
        assert_eq!(chip_code(0x0000, orientation, 0x005), 0x080D);

        // Terrain class 3 on an unrotated chip
        let palette = palette_bits(3).unwrap();
        assert_eq!(chip_code(palette, 0x0000, 0x010), 0x3010);
    }
}
