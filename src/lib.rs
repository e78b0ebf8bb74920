//! Software sprite rasterizer and simulation core for a small alien-invasion
//! shooter.  Everything here is host-agnostic: the binary in `main.rs` only
//! feeds input signals in and presents the canvas.

pub mod animation;
pub mod assets;
pub mod canvas;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod sprite;
pub mod unordered;
