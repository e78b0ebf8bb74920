//! Construction-time errors.  The simulation itself never fails once built.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("canvas must be non-empty, got {width}x{height}")]
    EmptyCanvas { width: usize, height: usize },

    #[error("sprite mask has {actual} cells, expected {expected}")]
    MaskLength { expected: usize, actual: usize },

    #[error("sprite art row {row} is {actual} wide, expected {expected}")]
    RaggedArt { row: usize, expected: usize, actual: usize },

    #[error("animation frame duration must be greater than zero")]
    ZeroFrameDuration,

    #[error("animation needs at least one frame")]
    NoFrames,

    #[error("bullet capacity must be greater than zero")]
    ZeroBulletCapacity,

    #[error("bullet capacity {requested} exceeds the limit of {max}")]
    BulletCapacityTooLarge { requested: usize, max: usize },

    #[error("player speed {speed} is outside 1..={max}")]
    PlayerSpeedOutOfRange { speed: i32, max: i32 },

    #[error("sprite handle {0} is not in the sheet")]
    UnknownSprite(usize),

    #[error("alien kind {kind} has no animation (only {available} loaded)")]
    MissingAnimation { kind: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, SetupError>;
