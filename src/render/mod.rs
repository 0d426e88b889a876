//! Raster output for weaver.
//!
//! Pixel buffers are written as lossless PNGs; the same helpers read
//! images back for the stencil checker.

mod png;

pub use png::{read_png, scale_pixels, write_png};
