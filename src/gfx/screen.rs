//! Indexed-color framebuffer
//!
//! Pixels are stored row-major as palette indices. Nothing here validates an
//! index against the palette; a bad index only shows up when the frame is
//! converted to RGBA.

use super::palette::{DEFAULT_PALETTE, Palette};
use super::sprite::Sprite;
use crate::consts::{INITIAL_COLOR, SCREEN_HEIGHT, SCREEN_PIXELS, SCREEN_WIDTH, TRANSPARENT};
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Screen {
    pixels: Vec<u8>,
    palette: Palette,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self::with_palette(DEFAULT_PALETTE)
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            pixels: vec![INITIAL_COLOR; SCREEN_PIXELS],
            palette,
        }
    }

    pub const fn width(&self) -> usize {
        SCREEN_WIDTH
    }

    pub const fn height(&self) -> usize {
        SCREEN_HEIGHT
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Raw palette indices, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Palette index at `(x, y)`, `None` outside the screen
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        Some(self.pixels[SCREEN_WIDTH * y + x])
    }

    /// Paint every pixel with the same color index
    pub fn flood_screen(&mut self, color_idx: u8) {
        self.pixels.fill(color_idx);
    }

    /// Write one pixel at buffer offset `width * y + x`
    ///
    /// Coordinates are not clipped per axis: an `x` past the right edge lands
    /// on a following row, a negative `x` on a preceding one. Offsets that
    /// fall outside the buffer are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color_idx: u8) {
        let offset = SCREEN_WIDTH as i64 * y as i64 + x as i64;
        match usize::try_from(offset).ok().and_then(|i| self.pixels.get_mut(i)) {
            Some(pixel) => *pixel = color_idx,
            None => log::trace!("dropped pixel write at ({x}, {y})"),
        }
    }

    /// Composite a sprite at its own position
    pub fn set_sprite(&mut self, sprite: &Sprite) {
        self.blit(sprite, sprite.x, sprite.y);
    }

    /// Composite a sprite's current cells with their top-left corner at `(x, y)`
    ///
    /// Transparent cells leave the screen untouched. Cells at or past the
    /// right or bottom edge are skipped; the left and top edges are not
    /// guarded, see [`Screen::set_pixel`].
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        for (dy, row) in sprite.data().iter().enumerate() {
            let py = y as i64 + dy as i64;
            if py >= SCREEN_HEIGHT as i64 {
                break;
            }
            for (dx, &cell) in row.iter().enumerate() {
                let px = x as i64 + dx as i64;
                if px >= SCREEN_WIDTH as i64 {
                    break;
                }
                // Both are below the upper bound and at least `x`/`y`, so they fit in i32
                if cell != TRANSPARENT {
                    self.set_pixel(px as i32, py as i32, cell as u8);
                }
            }
        }
    }

    /// Expand the indexed pixels into an RGBA byte buffer, row-major
    pub fn to_rgba_buffer(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for (offset, &index) in self.pixels.iter().enumerate() {
            let color = self
                .palette
                .get(index)
                .ok_or(Error::InvalidColorIndex { index, offset })?;
            out.extend_from_slice(bytemuck::bytes_of(color));
        }
        Ok(out)
    }
}
