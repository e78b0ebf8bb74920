//! Built-in bitmaps.  Art rows are listed top to bottom as they appear on
//! screen; `@` is opaque.

use crate::error::{Result, SetupError};
use crate::sprite::{MaskedSprite, SpriteId, SpriteSheet};

// ── Alien type A (8×8) ───────────────────────────────────────────────────────

const ALIEN_A: [&[&str]; 2] = [
    &[
        "...@@...",
        "..@@@@..",
        ".@@@@@@.",
        "@@.@@.@@",
        "@@@@@@@@",
        ".@.@@.@.",
        "@......@",
        ".@....@.",
    ],
    &[
        "...@@...",
        "..@@@@..",
        ".@@@@@@.",
        "@@.@@.@@",
        "@@@@@@@@",
        "..@..@..",
        ".@.@@.@.",
        "@.@..@.@",
    ],
];

// ── Alien type B (11×8) ──────────────────────────────────────────────────────

const ALIEN_B: [&[&str]; 2] = [
    &[
        "..@.....@..",
        "...@...@...",
        "..@@@@@@@..",
        ".@@.@@@.@@.",
        "@@@@@@@@@@@",
        "@.@@@@@@@.@",
        "@.@.....@.@",
        "...@@.@@...",
    ],
    &[
        "..@.....@..",
        "@..@...@..@",
        "@.@@@@@@@.@",
        "@@@.@@@.@@@",
        "@@@@@@@@@@@",
        ".@@@@@@@@@.",
        "..@.....@..",
        ".@.......@.",
    ],
];

// ── Alien type C (12×8) ──────────────────────────────────────────────────────

const ALIEN_C: [&[&str]; 2] = [
    &[
        "....@@@@....",
        ".@@@@@@@@@@.",
        "@@@@@@@@@@@@",
        "@@@..@@..@@@",
        "@@@@@@@@@@@@",
        "...@@..@@...",
        "..@@.@@.@@..",
        "@@........@@",
    ],
    &[
        "....@@@@....",
        ".@@@@@@@@@@.",
        "@@@@@@@@@@@@",
        "@@@..@@..@@@",
        "@@@@@@@@@@@@",
        "..@@@..@@@..",
        ".@@..@@..@@.",
        "..@@....@@..",
    ],
];

// ── Death burst (13×7) ───────────────────────────────────────────────────────

const ALIEN_DEATH: &[&str] = &[
    ".@..@...@..@.",
    "..@..@.@..@..",
    "...@.....@...",
    "@@.........@@",
    "...@.....@...",
    "..@..@.@..@..",
    ".@..@...@..@.",
];

// ── Player cannon (11×7) ─────────────────────────────────────────────────────

const PLAYER: &[&str] = &[
    ".....@.....",
    "....@@@....",
    "....@@@....",
    ".@@@@@@@@@.",
    "@@@@@@@@@@@",
    "@@@@@@@@@@@",
    "@@@@@@@@@@@",
];

// ── Bullet (1×3) ─────────────────────────────────────────────────────────────

const BULLET: &[&str] = &["@", "@", "@"];

/// Every sprite the game draws, plus the handles that name them.
///
/// `alien_frames[k]` holds the animation frames for alien kind `k + 1`
/// (TypeA, TypeB, TypeC).  Immutable after construction.
#[derive(Clone, Debug)]
pub struct Assets {
    pub sheet: SpriteSheet,
    pub alien_frames: Vec<Vec<SpriteId>>,
    pub death: SpriteId,
    pub player: SpriteId,
    pub bullet: SpriteId,
}

impl Assets {
    /// The stock art set.
    pub fn standard() -> Result<Self> {
        let mut sheet = SpriteSheet::new();
        let mut alien_frames = Vec::with_capacity(3);
        for art in [ALIEN_A, ALIEN_B, ALIEN_C] {
            let mut frames = Vec::with_capacity(art.len());
            for rows in art {
                frames.push(sheet.insert(MaskedSprite::from_art(rows)?));
            }
            alien_frames.push(frames);
        }
        let death = sheet.insert(MaskedSprite::from_art(ALIEN_DEATH)?);
        let player = sheet.insert(MaskedSprite::from_art(PLAYER)?);
        let bullet = sheet.insert(MaskedSprite::from_art(BULLET)?);

        Ok(Self { sheet, alien_frames, death, player, bullet })
    }

    /// Check that every handle points into the sheet and every alien kind
    /// has at least one frame.
    pub fn validate(&self) -> Result<()> {
        let handles = self
            .alien_frames
            .iter()
            .flatten()
            .chain([&self.death, &self.player, &self.bullet]);
        for id in handles {
            if !self.sheet.contains(*id) {
                return Err(SetupError::UnknownSprite(id.index()));
            }
        }
        if self.alien_frames.iter().any(|f| f.is_empty()) {
            return Err(SetupError::NoFrames);
        }
        Ok(())
    }
}
