//! Pixel buffers - the raster grids passed between pipeline stages.

use crate::types::Colour;

/// A 2-D grid of colours, origin top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Row-major pixel data: `pixels[y * width + x]`.
    pixels: Vec<Colour>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

impl PixelBuffer {
    /// Create a black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Colour::BLACK)
    }

    /// Create a buffer with every pixel set to `colour`.
    pub fn filled(width: usize, height: usize, colour: Colour) -> Self {
        Self {
            pixels: vec![colour; width * height],
            width,
            height,
        }
    }

    /// Create a buffer from a row-major grid (`rows[y][x]`).
    ///
    /// Ragged rows are padded with black to the width of the first row.
    pub fn from_rows(rows: Vec<Vec<Colour>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());

        let mut pixels = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, Colour::BLACK);
            pixels.extend(row);
        }

        Self {
            pixels,
            width,
            height,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Set a pixel. Panics if the position is outside the buffer.
    pub fn set(&mut self, x: usize, y: usize, colour: Colour) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x] = colour;
    }

    /// Get a single row of pixels.
    pub fn row(&self, y: usize) -> &[Colour] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Colour]> + '_ {
        // chunks_exact(0) panics, and a zero-width buffer has no pixels anyway
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Get the raw row-major pixel slice.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Copy a `w` x `h` block at (`x`, `y`) from `source` into the same
    /// coordinates of this buffer. The block is clipped to both buffers.
    pub fn copy_block(&mut self, source: &PixelBuffer, x: usize, y: usize, w: usize, h: usize) {
        let x_end = (x + w).min(self.width).min(source.width);
        let y_end = (y + h).min(self.height).min(source.height);
        if x >= x_end {
            return;
        }

        for row in y..y_end {
            let dst = row * self.width;
            let src = row * source.width;
            self.pixels[dst + x..dst + x_end].copy_from_slice(&source.pixels[src + x..src + x_end]);
        }
    }

    /// Convert to a flat RGB byte buffer (for image output).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 3);
        for colour in &self.pixels {
            buffer.extend_from_slice(&colour.to_rgb());
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.size(), (3, 2));
        assert!(buf.pixels().iter().all(|&c| c == Colour::BLACK));
    }

    #[test]
    fn test_get_set() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.set(1, 0, Colour::WHITE);

        assert_eq!(buf.get(1, 0), Some(Colour::WHITE));
        assert_eq!(buf.get(0, 1), Some(Colour::BLACK));
        assert_eq!(buf.get(2, 0), None);
        assert_eq!(buf.get(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_bounds_panics() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.set(2, 0, Colour::WHITE);
    }

    #[test]
    fn test_from_rows() {
        let buf = PixelBuffer::from_rows(vec![
            vec![Colour::RED, Colour::WHITE],
            vec![Colour::WHITE],
        ]);

        assert_eq!(buf.size(), (2, 2));
        assert_eq!(buf.get(0, 0), Some(Colour::RED));
        assert_eq!(buf.get(1, 1), Some(Colour::BLACK));
        assert_eq!(buf.row(0), &[Colour::RED, Colour::WHITE]);
        assert_eq!(buf.rows().count(), 2);
    }

    #[test]
    fn test_copy_block() {
        let source = PixelBuffer::filled(4, 4, Colour::RED);
        let mut dest = PixelBuffer::new(4, 4);

        dest.copy_block(&source, 2, 2, 2, 2);

        assert_eq!(dest.get(1, 1), Some(Colour::BLACK));
        assert_eq!(dest.get(2, 2), Some(Colour::RED));
        assert_eq!(dest.get(3, 3), Some(Colour::RED));
        assert_eq!(dest.get(2, 1), Some(Colour::BLACK));
    }

    #[test]
    fn test_copy_block_clips() {
        let source = PixelBuffer::filled(3, 3, Colour::WHITE);
        let mut dest = PixelBuffer::new(3, 3);

        dest.copy_block(&source, 2, 2, 5, 5);

        assert_eq!(dest.get(2, 2), Some(Colour::WHITE));
        assert_eq!(dest.get(1, 2), Some(Colour::BLACK));
    }

    #[test]
    fn test_to_rgb_bytes() {
        let buf = PixelBuffer::from_rows(vec![vec![Colour::RED, Colour::WHITE]]);
        assert_eq!(buf.to_rgb_bytes(), vec![255, 0, 0, 255, 255, 255]);
    }
}
