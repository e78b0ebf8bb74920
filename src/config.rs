//! Tunable constants.  `GameConfig::default()` reproduces the stock arcade
//! layout on a 224×256 canvas.

use crate::canvas::Color;
use crate::error::{Result, SetupError};

/// Upper bound on the bullet pool.  Far more than a screen can hold.
pub const MAX_BULLETS: usize = 4096;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,

    /// Pixels the player moves per frame for each unit of movement signal.
    pub player_speed: i32,
    pub player_y: i32,
    pub player_lives: u32,

    /// Signed per-frame step for new bullets; positive travels up.
    pub bullet_speed: i32,
    pub max_bullets: usize,

    /// Frames a dead alien's burst stays visible.
    pub death_frames: u32,
    /// Ticks each alien animation frame is shown for.
    pub frame_duration: usize,

    pub formation_rows: usize,
    pub formation_cols: usize,
    pub formation_origin: (i32, i32),
    pub formation_spacing: (i32, i32),

    pub clear_color: Color,
    pub alien_color: Color,
    pub bullet_color: Color,
    pub player_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 224,
            height: 256,
            player_speed: 2,
            player_y: 32,
            player_lives: 3,
            bullet_speed: 2,
            max_bullets: 128,
            death_frames: 10,
            frame_duration: 10,
            formation_rows: 5,
            formation_cols: 11,
            formation_origin: (20, 128),
            formation_spacing: (16, 17),
            clear_color: Color::rgb(0, 128, 0),
            alien_color: Color::rgb(128, 0, 0),
            bullet_color: Color::rgb(128, 0, 0),
            player_color: Color::rgb(128, 0, 0),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SetupError::EmptyCanvas { width: self.width, height: self.height });
        }
        if self.frame_duration == 0 {
            return Err(SetupError::ZeroFrameDuration);
        }
        if self.max_bullets == 0 {
            return Err(SetupError::ZeroBulletCapacity);
        }
        if self.max_bullets > MAX_BULLETS {
            return Err(SetupError::BulletCapacityTooLarge {
                requested: self.max_bullets,
                max: MAX_BULLETS,
            });
        }
        // A step wider than the canvas crosses it in one frame.
        let max_speed = i32::try_from(self.width).unwrap_or(i32::MAX);
        if !(1..=max_speed).contains(&self.player_speed) {
            return Err(SetupError::PlayerSpeedOutOfRange { speed: self.player_speed, max: max_speed });
        }
        Ok(())
    }
}
