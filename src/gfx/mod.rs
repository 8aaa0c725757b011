//! Indexed-color graphics
//!
//! Everything drawn goes through a 4-color palette. Sprites and glyphs hold
//! palette indices (or `TRANSPARENT`); the screen turns them into RGBA only
//! when a frame is presented.

pub mod font;
pub mod palette;
pub mod screen;
pub mod sprite;
pub mod text;

pub use font::{Font, default_font};
pub use palette::{DEFAULT_PALETTE, Palette, Rgba};
pub use screen::Screen;
pub use sprite::Sprite;
pub use text::{put_text, put_text_with};
