//! Core domain types for weaver.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGB thread colours
//! - `PixelBuffer` - raster grids passed between stages
//! - `WeaveConfig` / `Layer` - loom geometry and shed polarity

mod buffer;
mod colour;
mod config;

pub use buffer::PixelBuffer;
pub use colour::Colour;
pub use config::{Layer, WeaveConfig};
