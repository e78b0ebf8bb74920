//! Masked bitmaps, the sprite arena, and the compositor that draws them.

use crate::canvas::{Color, RasterCanvas};
use crate::error::{Result, SetupError};

/// A `width × height` opacity mask.  Stored row 0 lands at the *top* of the
/// drawn footprint (see [`blit`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedSprite {
    width: usize,
    height: usize,
    mask: Vec<bool>,
}

impl MaskedSprite {
    pub fn new(width: usize, height: usize, mask: Vec<bool>) -> Result<Self> {
        if mask.len() != width * height {
            return Err(SetupError::MaskLength {
                expected: width * height,
                actual: mask.len(),
            });
        }
        Ok(Self { width, height, mask })
    }

    /// Build a sprite from rows of ASCII art.  `@`, `#` and `1` are opaque,
    /// every other character is transparent.
    pub fn from_art(rows: &[&str]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut mask = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(SetupError::RaggedArt { row, expected: width, actual });
            }
            mask.extend(line.chars().map(|c| matches!(c, '@' | '#' | '1')));
        }
        Self::new(width, rows.len(), mask)
    }

    /// Fully opaque rectangle.
    pub fn solid(width: usize, height: usize) -> Self {
        Self { width, height, mask: vec![true; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_opaque(&self, xi: usize, yi: usize) -> bool {
        xi < self.width && yi < self.height && self.mask[yi * self.width + xi]
    }
}

/// Stable handle into a [`SpriteSheet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteId(usize);

impl SpriteId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena of every bitmap the game uses, built once at startup.  Entities
/// and animations refer to sprites by [`SpriteId`] rather than owning them.
#[derive(Clone, Debug, Default)]
pub struct SpriteSheet {
    sprites: Vec<MaskedSprite>,
}

impl SpriteSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sprite: MaskedSprite) -> SpriteId {
        self.sprites.push(sprite);
        SpriteId(self.sprites.len() - 1)
    }

    pub fn get(&self, id: SpriteId) -> Option<&MaskedSprite> {
        self.sprites.get(id.0)
    }

    /// Handles are only minted by `insert`, so a handle from this sheet is
    /// always valid.
    pub fn sprite(&self, id: SpriteId) -> &MaskedSprite {
        &self.sprites[id.0]
    }

    pub fn contains(&self, id: SpriteId) -> bool {
        id.0 < self.sprites.len()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Draw `sprite` with its footprint's lower-left corner at `(x, y)`.
///
/// Mask cell `(xi, yi)` goes to canvas row `height - 1 + y - yi`, so the
/// first stored row is the topmost drawn row.  Opaque cells overwrite,
/// transparent cells leave the canvas untouched, and anything off the grid
/// is clipped.
pub fn blit(canvas: &mut RasterCanvas, sprite: &MaskedSprite, x: i32, y: i32, color: Color) {
    let (cw, ch) = (canvas.width() as i64, canvas.height() as i64);
    let top = sprite.height as i64 - 1 + y as i64;
    for xi in 0..sprite.width {
        let sx = x as i64 + xi as i64;
        if sx < 0 || sx >= cw {
            continue;
        }
        for yi in 0..sprite.height {
            let sy = top - yi as i64;
            if sprite.mask[yi * sprite.width + xi] && sy >= 0 && sy < ch {
                canvas.set(sx as usize, sy as usize, color);
            }
        }
    }
}

/// Axis-aligned footprint test between two sprites placed as [`blit`] would
/// place them.
///
/// Both axes use the sprites' own extents: `[x, x + width)` horizontally and
/// `[y, y + height)` vertically.  Transparent cells inside the footprint
/// still count as hits.
pub fn overlaps(a: &MaskedSprite, xa: i32, ya: i32, b: &MaskedSprite, xb: i32, yb: i32) -> bool {
    let (xa, ya, xb, yb) = (xa as i64, ya as i64, xb as i64, yb as i64);
    xa < xb + b.width as i64
        && xa + a.width as i64 > xb
        && ya < yb + b.height as i64
        && ya + a.height as i64 > yb
}
