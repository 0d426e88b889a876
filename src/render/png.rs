//! PNG input and output for pixel buffers.
//!
//! Converts buffers to PNG files with optional integer scaling, and reads
//! images back into buffers for inspection tools.

use std::path::Path;

use image::{ImageBuffer, RgbImage};

use crate::error::{Result, WeaveError};
use crate::types::{Colour, PixelBuffer};

/// Write a pixel buffer to a PNG file.
///
/// # Arguments
///
/// * `buffer` - The pixels to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(buffer: &PixelBuffer, path: &Path, scale: u32) -> Result<()> {
    let too_large = || WeaveError::Io {
        path: path.to_path_buf(),
        message: format!(
            "{}x{} image at scale {} is too large for a PNG",
            buffer.width(),
            buffer.height(),
            scale
        ),
    };

    let dimension = |n: usize| {
        u32::try_from(n)
            .ok()
            .and_then(|n| n.checked_mul(scale.max(1)))
            .ok_or_else(too_large)
    };
    let width = dimension(buffer.width())?;
    let height = dimension(buffer.height())?;

    let scaled = scale_pixels(buffer, scale).map_err(|_| too_large())?;

    let img: RgbImage =
        ImageBuffer::from_raw(width, height, scaled.to_rgb_bytes()).ok_or_else(too_large)?;

    img.save(path).map_err(|e| WeaveError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Read an image file into a pixel buffer. Alpha is discarded.
pub fn read_png(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .map_err(|e| WeaveError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read image: {}", e),
        })?
        .to_rgb8();

    let rows: Vec<Vec<Colour>> = img
        .rows()
        .map(|row| row.map(|pixel| Colour::from(pixel.0)).collect())
        .collect();

    Ok(PixelBuffer::from_rows(rows))
}

/// Scale a buffer by an integer factor. A scale of 0 is treated as 1.
///
/// Uses nearest-neighbour scaling so thread edges stay crisp.
pub fn scale_pixels(buffer: &PixelBuffer, scale: u32) -> Result<PixelBuffer> {
    if scale <= 1 {
        return Ok(buffer.clone());
    }

    let too_large = || WeaveError::Parse {
        message: format!(
            "scaling {}x{} by {} overflows",
            buffer.width(),
            buffer.height(),
            scale
        ),
        help: Some("Use a smaller --scale".to_string()),
    };
    let scale = usize::try_from(scale).map_err(|_| too_large())?;
    let width = buffer.width().checked_mul(scale).ok_or_else(too_large)?;
    let height = buffer.height().checked_mul(scale).ok_or_else(too_large)?;
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(too_large)?;

    let mut scaled = PixelBuffer::new(width, height);

    for (y, row) in buffer.rows().enumerate() {
        for (x, &colour) in row.iter().enumerate() {
            for sy in 0..scale {
                for sx in 0..scale {
                    scaled.set(x * scale + sx, y * scale + sy, colour);
                }
            }
        }
    }

    Ok(scaled)
}
