//! Palette colors

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A true color, one byte per channel, laid out as in an RGBA byte buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }
}

/// Fixed 4-entry palette, darkest first
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette([Rgba; 4]);

/// The classic green GameBoy shades
pub const DEFAULT_PALETTE: Palette = Palette([
    Rgba::opaque(0x0F, 0x38, 0x0F),
    Rgba::opaque(0x30, 0x62, 0x30),
    Rgba::opaque(0x8B, 0xAC, 0x0F),
    Rgba::opaque(0x9B, 0xBC, 0x0F),
]);

impl Palette {
    pub const fn new(colors: [Rgba; 4]) -> Self {
        Self(colors)
    }

    /// Color for a palette index, `None` when the index is out of range
    #[inline]
    pub fn get(&self, index: u8) -> Option<&Rgba> {
        self.0.get(index as usize)
    }

    pub fn colors(&self) -> &[Rgba; 4] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_literals() {
        let c = DEFAULT_PALETTE.colors();
        assert_eq!(c[0], Rgba::new(0x0F, 0x38, 0x0F, 0xFF));
        assert_eq!(c[1], Rgba::new(0x30, 0x62, 0x30, 0xFF));
        assert_eq!(c[2], Rgba::new(0x8B, 0xAC, 0x0F, 0xFF));
        assert_eq!(c[3], Rgba::new(0x9B, 0xBC, 0x0F, 0xFF));
    }

    #[test]
    fn test_out_of_range_lookup() {
        assert!(DEFAULT_PALETTE.get(3).is_some());
        assert!(DEFAULT_PALETTE.get(4).is_none());
    }

    #[test]
    fn test_rgba_byte_layout() {
        let color = Rgba::new(1, 2, 3, 4);
        assert_eq!(bytemuck::bytes_of(&color), &[1, 2, 3, 4]);
    }
}
