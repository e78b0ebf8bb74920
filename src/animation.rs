//! Looping frame clocks for multi-frame sprites.

use crate::error::{Result, SetupError};
use crate::sprite::SpriteId;

/// Tick counter that maps elapsed ticks onto a looping frame index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationClock {
    time: usize,
    frame_duration: usize,
    num_frames: usize,
}

impl AnimationClock {
    pub fn new(num_frames: usize, frame_duration: usize) -> Result<Self> {
        if frame_duration == 0 {
            return Err(SetupError::ZeroFrameDuration);
        }
        if num_frames == 0 {
            return Err(SetupError::NoFrames);
        }
        Ok(Self { time: 0, frame_duration, num_frames })
    }

    pub fn advance(&mut self) {
        self.time += 1;
        if self.time == self.num_frames * self.frame_duration {
            self.time = 0;
        }
    }

    pub fn current_frame_index(&self) -> usize {
        self.time / self.frame_duration
    }

    pub fn time(&self) -> usize {
        self.time
    }

    pub fn frame_duration(&self) -> usize {
        self.frame_duration
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }
}

/// Ordered frames plus the clock that selects between them.  Always loops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteAnimation {
    frames: Vec<SpriteId>,
    clock: AnimationClock,
}

impl SpriteAnimation {
    pub fn new(frames: Vec<SpriteId>, frame_duration: usize) -> Result<Self> {
        let clock = AnimationClock::new(frames.len(), frame_duration)?;
        Ok(Self { frames, clock })
    }

    pub fn advance(&mut self) {
        self.clock.advance();
    }

    pub fn current(&self) -> SpriteId {
        self.frames[self.clock.current_frame_index()]
    }

    pub fn frames(&self) -> &[SpriteId] {
        &self.frames
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }
}
