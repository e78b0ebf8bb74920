//! CPU-side pixel grid rendered every frame.
//!
//! Row 0 is the *bottom* row of the displayed image: the canvas is laid out
//! the way a texture is uploaded, so `y` grows upward on screen.

use crate::error::{Result, SetupError};

/// Packed `0xRRGGBBAA` colour with alpha fixed at 255.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xFF)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RasterCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl RasterCanvas {
    pub fn new(width: usize, height: usize, fill: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SetupError::EmptyCanvas { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// `None` outside the grid.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Raw row-major grid, bottom row first.  This is what the presentation
    /// layer consumes.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    // Callers bounds-check first; only the compositor writes pixels.
    pub(crate) fn set(&mut self, x: usize, y: usize, color: Color) {
        self.pixels[y * self.width + x] = color;
    }
}
