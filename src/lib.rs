//! Stumge - a tiny GameBoy-resolution game engine
//!
//! Core modules:
//! - `gfx`: Indexed-color framebuffer, sprites, palette and bitmap font
//! - `input`: Edge-triggered button state fed by raw key events
//! - `engine`: Per-frame update/repaint loop, host agnostic
//! - `platform`: Browser and headless hosts
//! - `settings`: Start options
//! - `vector`: 2D vector math for game code

pub mod engine;
pub mod error;
pub mod gfx;
pub mod input;
pub mod platform;
pub mod settings;
pub mod vector;

pub use engine::{Engine, FrameLoop, Presenter};
pub use error::{Error, Result};
pub use gfx::{Font, Palette, Rgba, Screen, Sprite};
pub use input::{Button, InputState};
pub use settings::EngineOptions;
pub use vector::Vector2D;

/// Engine configuration constants
pub mod consts {
    /// Screen width in pixels (same as the GameBoy)
    pub const SCREEN_WIDTH: usize = 160;
    /// Screen height in pixels (same as the GameBoy)
    pub const SCREEN_HEIGHT: usize = 144;
    /// Total pixel count of the framebuffer
    pub const SCREEN_PIXELS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

    /// Sprite cell value that leaves the underlying pixel untouched
    pub const TRANSPARENT: i8 = -1;

    /// Color index the screen starts filled with
    pub const INITIAL_COLOR: u8 = 3;

    /// Horizontal gap between glyphs when printing text
    pub const GLYPH_GUTTER: i32 = 1;

    /// Default canvas element id looked up by the web host
    pub const DEFAULT_CANVAS_ID: &str = "stumge";
}
