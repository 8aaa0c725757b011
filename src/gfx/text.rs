//! Single-line text printing with the bitmap font

use super::font::{Font, default_font};
use super::screen::Screen;
use crate::consts::GLYPH_GUTTER;

/// Print `text` with the built-in font, top-left corner at `(x, y)`
///
/// Returns the cursor position just after the last glyph's gutter.
pub fn put_text(screen: &mut Screen, text: &str, x: i32, y: i32) -> i32 {
    put_text_with(screen, default_font(), text, x, y)
}

/// Print `text` upper-cased, left to right, with a 1px gap between glyphs
///
/// No wrapping: glyphs past the right edge are clipped by the screen.
pub fn put_text_with(screen: &mut Screen, font: &Font, text: &str, x: i32, y: i32) -> i32 {
    let mut cursor_x = x;
    for c in text.to_uppercase().chars() {
        let glyph = font.glyph(c);
        screen.blit(glyph, cursor_x, y);
        cursor_x = cursor_x
            .saturating_add(glyph.width() as i32)
            .saturating_add(GLYPH_GUTTER);
    }
    cursor_x
}
