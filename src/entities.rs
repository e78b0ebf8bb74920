//! All game entity types — plain data plus the state aggregate.

use crate::animation::SpriteAnimation;
use crate::config::GameConfig;
use crate::error::{Result, SetupError};
use crate::unordered::UnorderedVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlienKind {
    Dead,
    TypeA,
    TypeB,
    TypeC,
}

impl AlienKind {
    /// Map the 1-based formation code (1 = A, 2 = B, 3 = C) onto a kind.
    /// Anything else is treated as dead.
    pub fn from_code(code: usize) -> Self {
        match code {
            1 => AlienKind::TypeA,
            2 => AlienKind::TypeB,
            3 => AlienKind::TypeC,
            _ => AlienKind::Dead,
        }
    }

    /// Index into the per-type animation table; `None` for dead aliens.
    pub fn animation_index(self) -> Option<usize> {
        match self {
            AlienKind::Dead => None,
            AlienKind::TypeA => Some(0),
            AlienKind::TypeB => Some(1),
            AlienKind::TypeC => Some(2),
        }
    }

    pub fn is_dead(self) -> bool {
        self == AlienKind::Dead
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Rows moved per frame; positive travels up toward the formation.
    pub dir: i32,
}

// ── Player & aliens ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub lives: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub kind: AlienKind,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub width: usize,
    pub height: usize,
    pub player: Player,
    /// Fixed roster; dead aliens stay in place.
    pub aliens: Vec<Alien>,
    /// One countdown per roster slot, same indexing as `aliens`.  Armed once
    /// at construction and never re-armed.
    pub death_timers: Vec<u32>,
    pub bullets: UnorderedVec<Bullet>,
    /// One animation per living alien kind, indexed by
    /// [`AlienKind::animation_index`].
    pub animations: Vec<SpriteAnimation>,
    /// Frames simulated so far.
    pub frame: u64,
}

impl GameState {
    /// Assemble a state from an explicit roster.  Canvas size, bullet
    /// capacity and the death-timer start value come from `config`.
    pub fn with_roster(
        config: &GameConfig,
        player: Player,
        aliens: Vec<Alien>,
        animations: Vec<SpriteAnimation>,
    ) -> Result<Self> {
        config.validate()?;
        for alien in &aliens {
            if let Some(idx) = alien.kind.animation_index() {
                if idx >= animations.len() {
                    return Err(SetupError::MissingAnimation {
                        kind: idx + 1,
                        available: animations.len(),
                    });
                }
            }
        }
        let death_timers = vec![config.death_frames; aliens.len()];
        Ok(Self {
            width: config.width,
            height: config.height,
            player,
            aliens,
            death_timers,
            bullets: UnorderedVec::with_capacity(config.max_bullets),
            animations,
            frame: 0,
        })
    }

    pub fn living_aliens(&self) -> usize {
        self.aliens.iter().filter(|a| !a.kind.is_dead()).count()
    }

    /// Whether roster slot `index` still draws anything.
    pub fn is_visible(&self, index: usize) -> bool {
        match self.aliens.get(index) {
            Some(alien) if alien.kind.is_dead() => self.death_timers[index] > 0,
            Some(_) => true,
            None => false,
        }
    }
}
