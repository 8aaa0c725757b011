//! Built-in 6x6 bitmap font
//!
//! Covers `A-Z`, `0-9`, `. , ; : ' ! " ?` and space. Anything else renders as
//! a hollow box. The table is built once and shared by every engine.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::sprite::Sprite;
use crate::consts::TRANSPARENT;

type Glyph = [[i8; 6]; 6];

const T: i8 = TRANSPARENT;

/// Character to glyph lookup with a fallback for unknown characters
#[derive(Debug, Clone)]
pub struct Font {
    glyphs: HashMap<char, Sprite>,
    fallback: Sprite,
}

impl Font {
    pub fn new(glyphs: HashMap<char, Sprite>, fallback: Sprite) -> Self {
        Self { glyphs, fallback }
    }

    /// Glyph for `c`, or the fallback glyph if the font does not have it
    pub fn glyph(&self, c: char) -> &Sprite {
        self.glyphs.get(&c).unwrap_or(&self.fallback)
    }

    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains_key(&c)
    }

    pub fn fallback(&self) -> &Sprite {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

static DEFAULT_FONT: LazyLock<Font> = LazyLock::new(|| {
    let glyphs = GLYPHS
        .iter()
        .map(|(c, rows)| (*c, Sprite::from_rows(rows)))
        .collect();
    Font::new(glyphs, Sprite::from_rows(&UNKNOWN))
});

/// The built-in font
pub fn default_font() -> &'static Font {
    &DEFAULT_FONT
}

const GLYPHS: [(char, Glyph); 45] = [
    ('A', LETTER_A),
    ('B', LETTER_B),
    ('C', LETTER_C),
    ('D', LETTER_D),
    ('E', LETTER_E),
    ('F', LETTER_F),
    ('G', LETTER_G),
    ('H', LETTER_H),
    ('I', LETTER_I),
    ('J', LETTER_J),
    ('K', LETTER_K),
    ('L', LETTER_L),
    ('M', LETTER_M),
    ('N', LETTER_N),
    ('O', LETTER_O),
    ('P', LETTER_P),
    ('Q', LETTER_Q),
    ('R', LETTER_R),
    ('S', LETTER_S),
    ('T', LETTER_T),
    ('U', LETTER_U),
    ('V', LETTER_V),
    ('W', LETTER_W),
    ('X', LETTER_X),
    ('Y', LETTER_Y),
    ('Z', LETTER_Z),
    ('0', DIGIT_0),
    ('1', DIGIT_1),
    ('2', DIGIT_2),
    ('3', DIGIT_3),
    ('4', DIGIT_4),
    ('5', DIGIT_5),
    ('6', DIGIT_6),
    ('7', DIGIT_7),
    ('8', DIGIT_8),
    ('9', DIGIT_9),
    ('.', PERIOD),
    (',', COMMA),
    (';', SEMICOLON),
    (':', COLON),
    ('\'', APOSTROPHE),
    ('!', EXCLAMATION),
    ('"', QUOTE),
    ('?', QUESTION),
    (' ', SPACE),
];

const LETTER_A: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, T, T, 0, 0, 0],
    [0, T, T, 0, 0, 0],
    [0, 0, 0, 0, 0, 0],
    [0, T, T, 0, 0, 0],
    [0, T, T, 0, 0, 0],
];

const LETTER_B: Glyph = [
    [0, 0, 0, 0, 0, T],
    [0, 0, T, T, 0, 0],
    [0, 0, 0, 0, 0, T],
    [0, 0, T, T, 0, 0],
    [0, 0, T, T, 0, 0],
    [0, 0, 0, 0, 0, T],
];

const LETTER_C: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, 0, T, T, 0, 0],
    [0, 0, T, T, T, T],
    [0, 0, T, T, T, T],
    [0, 0, T, T, 0, 0],
    [T, 0, 0, 0, 0, T],
];

const LETTER_D: Glyph = [
    [0, 0, 0, 0, 0, T],
    [0, T, T, 0, 0, 0],
    [0, T, T, 0, 0, 0],
    [0, T, T, 0, 0, 0],
    [0, T, T, 0, 0, 0],
    [0, 0, 0, 0, 0, T],
];

const LETTER_E: Glyph = [
    [0, 0, 0, 0, 0, 0],
    [0, 0, T, T, T, T],
    [0, 0, 0, 0, 0, T],
    [0, 0, T, T, T, T],
    [0, 0, T, T, T, T],
    [0, 0, 0, 0, 0, 0],
];

const LETTER_F: Glyph = [
    [0, 0, 0, 0, 0, 0],
    [0, 0, T, T, T, T],
    [0, 0, T, T, T, T],
    [0, 0, 0, 0, 0, T],
    [0, 0, T, T, T, T],
    [0, 0, T, T, T, T],
];

const LETTER_G: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, 0, T, T, 0, 0],
    [0, 0, T, T, T, T],
    [0, 0, T, 0, 0, 0],
    [0, 0, T, T, 0, 0],
    [T, 0, 0, 0, 0, 0],
];

const LETTER_H: Glyph = [
    [0, T, T, T, 0, 0],
    [0, T, T, T, 0, 0],
    [0, 0, 0, 0, 0, 0],
    [0, T, T, T, 0, 0],
    [0, T, T, T, 0, 0],
    [0, T, T, T, 0, 0],
];

const LETTER_I: Glyph = [
    [T, 0, 0, 0, 0, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, 0, 0, 0, 0, T],
];

const LETTER_J: Glyph = [
    [T, T, 0, 0, 0, 0],
    [T, T, T, 0, 0, T],
    [T, T, T, 0, 0, T],
    [0, 0, T, 0, 0, T],
    [0, 0, T, 0, 0, T],
    [T, 0, 0, 0, T, T],
];

const LETTER_K: Glyph = [
    [0, 0, T, T, 0, 0],
    [0, 0, T, 0, 0, T],
    [0, 0, 0, 0, T, T],
    [0, 0, 0, 0, T, T],
    [0, 0, T, 0, 0, T],
    [0, 0, T, T, 0, 0],
];

const LETTER_L: Glyph = [
    [0, 0, T, T, T, T],
    [0, 0, T, T, T, T],
    [0, 0, T, T, T, T],
    [0, 0, T, T, T, T],
    [0, 0, T, T, T, T],
    [0, 0, 0, 0, 0, 0],
];

const LETTER_M: Glyph = [
    [0, T, T, T, 0, 0],
    [0, 0, T, 0, 0, 0],
    [0, 0, 0, 0, 0, 0],
    [0, T, 0, T, 0, 0],
    [0, T, T, T, 0, 0],
    [0, T, T, T, 0, 0],
];

const LETTER_N: Glyph = [
    [0, T, T, T, 0, 0],
    [0, 0, T, T, 0, 0],
    [0, 0, 0, T, 0, 0],
    [0, T, 0, 0, 0, 0],
    [0, T, T, 0, 0, 0],
    [0, T, T, T, 0, 0],
];

const LETTER_O: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, 0, T, T, 0, 0],
    [0, 0, T, T, 0, 0],
    [0, 0, T, T, 0, 0],
    [0, 0, T, T, 0, 0],
    [T, 0, 0, 0, 0, T],
];

const LETTER_P: Glyph = [
    [0, 0, 0, 0, 0, T],
    [0, 0, T, T, 0, 0],
    [0, 0, T, T, 0, 0],
    [0, 0, 0, 0, 0, T],
    [0, 0, T, T, T, T],
    [0, 0, T, T, T, T],
];

const LETTER_Q: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, 0, T, T, T, 0],
    [0, 0, T, T, T, 0],
    [0, 0, T, 0, T, 0],
    [0, 0, T, T, 0, T],
    [T, 0, 0, 0, T, 0],
];

const LETTER_R: Glyph = [
    [0, 0, 0, 0, 0, T],
    [0, 0, T, T, 0, 0],
    [0, 0, T, T, 0, 0],
    [0, 0, 0, 0, 0, T],
    [0, 0, T, 0, T, T],
    [0, 0, T, T, 0, 0],
];

const LETTER_S: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, 0, T, T, T, T],
    [T, 0, 0, 0, 0, T],
    [T, T, T, 0, 0, 0],
    [0, T, T, 0, 0, 0],
    [T, 0, 0, 0, 0, T],
];

const LETTER_T: Glyph = [
    [0, 0, 0, 0, 0, 0],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
];

const LETTER_U: Glyph = [
    [0, T, T, T, 0, 0],
    [0, T, T, T, 0, 0],
    [0, T, T, T, 0, 0],
    [0, T, T, T, 0, 0],
    [0, T, T, 0, 0, 0],
    [T, 0, 0, 0, 0, T],
];

const LETTER_V: Glyph = [
    [0, T, T, T, 0, 0],
    [0, T, T, T, 0, 0],
    [0, T, T, T, 0, 0],
    [0, T, T, T, 0, 0],
    [T, 0, T, 0, 0, T],
    [T, T, 0, 0, T, T],
];

const LETTER_W: Glyph = [
    [0, T, T, T, 0, 0],
    [0, T, T, T, 0, 0],
    [0, T, 0, T, 0, 0],
    [0, 0, 0, 0, 0, 0],
    [0, 0, T, 0, 0, 0],
    [0, T, T, T, 0, 0],
];

const LETTER_X: Glyph = [
    [0, T, T, T, 0, 0],
    [T, 0, T, 0, 0, T],
    [T, T, 0, 0, T, T],
    [T, 0, 0, 0, T, T],
    [0, 0, T, T, 0, T],
    [0, T, T, T, T, 0],
];

const LETTER_Y: Glyph = [
    [0, 0, T, T, 0, 0],
    [0, 0, T, T, 0, 0],
    [T, 0, 0, 0, 0, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
];

const LETTER_Z: Glyph = [
    [0, 0, 0, 0, 0, 0],
    [T, T, T, 0, 0, 0],
    [T, T, 0, 0, 0, T],
    [T, 0, 0, 0, T, T],
    [0, 0, 0, T, T, T],
    [0, 0, 0, 0, 0, 0],
];

const DIGIT_0: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, 0, T, T, 0, 0],
    [0, 0, T, 0, 0, 0],
    [0, 0, 0, T, 0, 0],
    [0, 0, T, T, 0, 0],
    [T, 0, 0, 0, 0, T],
];

const DIGIT_1: Glyph = [
    [T, T, 0, 0, T, T],
    [T, 0, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, 0, 0, 0, 0, T],
];

const DIGIT_2: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, T, T, 0, 0, 0],
    [T, T, T, 0, 0, 0],
    [T, 0, 0, 0, 0, T],
    [0, 0, 0, T, T, T],
    [0, 0, 0, 0, 0, 0],
];

const DIGIT_3: Glyph = [
    [0, 0, 0, 0, 0, T],
    [T, T, T, 0, 0, 0],
    [T, 0, 0, 0, 0, T],
    [T, T, T, 0, 0, 0],
    [T, T, T, 0, 0, 0],
    [0, 0, 0, 0, 0, T],
];

const DIGIT_4: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, 0, T, 0, 0, T],
    [0, T, T, 0, 0, T],
    [0, T, T, 0, 0, T],
    [0, 0, 0, 0, 0, 0],
    [T, T, T, 0, 0, T],
];

const DIGIT_5: Glyph = [
    [0, 0, 0, 0, 0, T],
    [0, 0, T, T, T, T],
    [0, 0, 0, 0, 0, T],
    [T, T, T, 0, 0, 0],
    [0, T, T, 0, 0, 0],
    [T, 0, 0, 0, 0, T],
];

const DIGIT_6: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, 0, T, T, T, T],
    [0, 0, 0, 0, 0, T],
    [0, 0, T, T, 0, 0],
    [0, 0, T, T, 0, 0],
    [T, 0, 0, 0, 0, T],
];

const DIGIT_7: Glyph = [
    [0, 0, 0, 0, 0, 0],
    [T, T, T, T, 0, 0],
    [T, T, T, 0, 0, T],
    [T, T, 0, 0, T, T],
    [T, 0, 0, 0, T, T],
    [T, 0, 0, 0, T, T],
];

const DIGIT_8: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, T, T, 0, 0, 0],
    [T, 0, 0, 0, 0, T],
    [0, T, T, 0, 0, 0],
    [0, T, T, 0, 0, 0],
    [T, 0, 0, 0, 0, T],
];

const DIGIT_9: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, T, T, 0, 0, 0],
    [0, T, T, 0, 0, 0],
    [T, 0, 0, 0, 0, 0],
    [T, T, T, 0, 0, 0],
    [T, 0, 0, 0, 0, T],
];

const PERIOD: Glyph = [
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
];

const COMMA: Glyph = [
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, T, 0, T, T],
    [T, T, 0, T, T, T],
];

const SEMICOLON: Glyph = [
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, T, T, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, 0, 0, T, T, T],
];

const COLON: Glyph = [
    [T, T, T, T, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, T, T, T, T],
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
];

const APOSTROPHE: Glyph = [
    [T, T, 0, 0, T, T],
    [T, T, 0, 0, T, T],
    [T, T, T, 0, T, T],
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
];

const EXCLAMATION: Glyph = [
    [T, T, 0, 0, 0, T],
    [T, T, 0, 0, 0, T],
    [T, T, 0, 0, 0, T],
    [T, T, 0, 0, 0, T],
    [T, T, T, T, T, T],
    [T, T, 0, 0, 0, T],
];

const QUOTE: Glyph = [
    [0, 0, T, 0, 0, T],
    [0, 0, T, 0, 0, T],
    [T, 0, T, T, 0, T],
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
];

const QUESTION: Glyph = [
    [T, 0, 0, 0, 0, T],
    [0, T, T, 0, 0, 0],
    [T, T, 0, 0, 0, T],
    [T, T, 0, 0, T, T],
    [T, T, T, T, T, T],
    [T, T, 0, 0, T, T],
];

const SPACE: Glyph = [
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
    [T, T, T, T, T, T],
];

const UNKNOWN: Glyph = [
    [0, 0, 0, 0, 0, 0],
    [0, T, T, T, T, 0],
    [0, T, T, T, T, 0],
    [0, T, T, T, T, 0],
    [0, T, T, T, T, 0],
    [0, 0, 0, 0, 0, 0],
];
