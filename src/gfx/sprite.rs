//! Sprites: small indexed-color bitmaps with a position
//!
//! A sprite keeps two grids. `original` is the authored baseline and `data`
//! is what currently gets drawn, possibly rotated or flipped. Rotations are
//! always applied from `original`, flips are applied to the current `data`.

use serde::{Deserialize, Serialize};

use crate::consts::TRANSPARENT;

/// Rows of color indices; `TRANSPARENT` cells are skipped when compositing
pub type Grid = Vec<Vec<i8>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    original: Grid,
    data: Grid,
    /// Left edge in screen pixels
    pub x: i32,
    /// Top edge in screen pixels
    pub y: i32,
}

impl Sprite {
    pub fn new(data: Grid) -> Self {
        Self::at(data, 0, 0)
    }

    pub fn at(data: Grid, x: i32, y: i32) -> Self {
        Self {
            original: data.clone(),
            data,
            x,
            y,
        }
    }

    /// Build a sprite from a fixed-size bitmap literal
    pub fn from_rows<const W: usize>(rows: &[[i8; W]]) -> Self {
        Self::new(rows.iter().map(|row| row.to_vec()).collect())
    }

    /// Currently displayed cells
    pub fn data(&self) -> &Grid {
        &self.data
    }

    /// Authored baseline that `rotate` starts from
    pub fn original(&self) -> &Grid {
        &self.original
    }

    /// Cell at column `x`, row `y` of the current data
    pub fn cell(&self, x: usize, y: usize) -> Option<i8> {
        self.data.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Rotate by `position` quarter turns clockwise, starting from the original
    ///
    /// `rotate(0)` restores the original orientation and also discards any flips.
    /// Four quarter turns are the identity, so only `position % 4` are applied.
    pub fn rotate(&mut self, position: u32) {
        self.data = self.original.clone();
        for _ in 0..position % 4 {
            self.data = rotate_step(&self.data);
        }
    }

    /// Mirror every row left to right
    pub fn horizontal_flip(&mut self) {
        for row in &mut self.data {
            row.reverse();
        }
    }

    /// Mirror the row order top to bottom
    pub fn vertical_flip(&mut self) {
        self.data.reverse();
    }

    /// Copy whose baseline is the current orientation
    ///
    /// The copy forgets this sprite's original: `rotate(0)` on it returns to
    /// whatever was displayed when the copy was taken.
    pub fn get_copy(&self) -> Self {
        Self::at(self.data.clone(), self.x, self.y)
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.data.len()
    }

    /// Axis-aligned bounding box overlap; touching edges do not collide
    pub fn collides_with(&self, other: &Sprite) -> bool {
        let (w, h) = (self.width() as i64, self.height() as i64);
        let (ow, oh) = (other.width() as i64, other.height() as i64);
        let (x, y) = (self.x as i64, self.y as i64);
        let (ox, oy) = (other.x as i64, other.y as i64);

        x < ox + ow && x + w > ox && y < oy + oh && y + h > oy
    }
}

/// One quarter turn: `result[y][x] = data[w - 1 - x][y]` where `w` is the row count
///
/// Well formed for any rectangular grid. Cells missing from ragged rows come
/// out transparent.
fn rotate_step(data: &[Vec<i8>]) -> Grid {
    let w = data.len();
    let h = data.first().map_or(0, Vec::len);

    (0..h)
        .map(|y| {
            (0..w)
                .map(|x| data[w - 1 - x].get(y).copied().unwrap_or(TRANSPARENT))
                .collect()
        })
        .collect()
}
