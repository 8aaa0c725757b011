//! Engine error type

use thiserror::Error;

/// Errors surfaced by the engine
///
/// Expected inputs never produce one of these: unknown characters render the
/// fallback glyph and unknown keys are ignored.
#[derive(Debug, Error)]
pub enum Error {
    /// Normalizing a vector of zero magnitude
    #[error("cannot normalize a zero-magnitude vector")]
    ZeroMagnitude,

    /// A framebuffer pixel holds an index the palette does not have
    #[error("color index {index} at pixel {offset} is outside the palette")]
    InvalidColorIndex { index: u8, offset: usize },

    /// Display scale must be a positive integer
    #[error("display scale must be at least 1, got {0}")]
    InvalidScale(u32),

    /// Options could not be parsed
    #[error("invalid engine options: {0}")]
    Config(#[from] serde_json::Error),

    /// The browser host refused an operation
    #[error("host error: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, Error>;
