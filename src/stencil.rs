//! Stencil checking.
//!
//! A black-and-white image can be cut as a stencil only if its white
//! background is a single connected piece (plus at most one enclosed
//! piece); any further white island would fall out when cut. Regions are
//! found by 4-connected flood fill.

use crate::types::{Colour, PixelBuffer};

/// Smallest rectangle containing a region, inclusive on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

/// A 4-connected set of pixel positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pixels: Vec<(usize, usize)>,
}

impl Region {
    /// Pixel positions as (x, y), in discovery order.
    pub fn pixels(&self) -> &[(usize, usize)] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Bounding box of the region. A region always has at least one pixel.
    pub fn bounding_box(&self) -> BoundingBox {
        let (x0, y0) = self.pixels[0];
        self.pixels.iter().fold(
            BoundingBox {
                min_x: x0,
                min_y: y0,
                max_x: x0,
                max_y: y0,
            },
            |b, &(x, y)| BoundingBox {
                min_x: b.min_x.min(x),
                min_y: b.min_y.min(y),
                max_x: b.max_x.max(x),
                max_y: b.max_y.max(y),
            },
        )
    }
}

/// Find every closed region of pixels that satisfy `test`.
///
/// Regions are returned in the order their first pixel appears scanning
/// rows top to bottom.
pub fn closed_regions(buffer: &PixelBuffer, test: impl Fn(Colour) -> bool) -> Vec<Region> {
    let (width, height) = buffer.size();
    let mut todo: Vec<bool> = buffer.pixels().iter().map(|&c| test(c)).collect();
    let mut regions = Vec::new();
    let mut stack = Vec::new();

    for start in 0..todo.len() {
        if !todo[start] {
            continue;
        }

        todo[start] = false;
        stack.push(start);
        let mut pixels = Vec::new();

        while let Some(index) = stack.pop() {
            let (x, y) = (index % width, index / width);
            pixels.push((x, y));

            let mut visit = |nx: usize, ny: usize| {
                let n = ny * width + nx;
                if todo[n] {
                    todo[n] = false;
                    stack.push(n);
                }
            };
            if x > 0 {
                visit(x - 1, y);
            }
            if y > 0 {
                visit(x, y - 1);
            }
            if x + 1 < width {
                visit(x + 1, y);
            }
            if y + 1 < height {
                visit(x, y + 1);
            }
        }

        regions.push(Region { pixels });
    }

    regions
}

/// Outcome of a stencil check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StencilReport {
    /// The stencil can be cut; `cuts` black regions will be removed.
    Valid { cuts: usize },

    /// The white background falls apart into too many pieces.
    Invalid { white_regions: Vec<Region> },
}

impl StencilReport {
    pub fn is_valid(&self) -> bool {
        matches!(self, StencilReport::Valid { .. })
    }
}

/// Check whether a black-on-white image can be cut as a stencil.
pub fn check_stencil(buffer: &PixelBuffer) -> StencilReport {
    let white_regions = closed_regions(buffer, |c| c == Colour::WHITE);
    log::debug!("stencil: {} white regions", white_regions.len());

    if white_regions.len() > 2 {
        return StencilReport::Invalid { white_regions };
    }

    let cuts = closed_regions(buffer, |c| c == Colour::BLACK).len();
    StencilReport::Valid { cuts }
}

/// Copy of `buffer` with each region's bounding box outlined in red.
pub fn mark_regions(buffer: &PixelBuffer, regions: &[Region]) -> PixelBuffer {
    let mut marked = buffer.clone();

    for region in regions.iter().filter(|r| !r.is_empty()) {
        let b = region.bounding_box();
        for x in b.min_x..=b.max_x {
            marked.set(x, b.min_y, Colour::RED);
            marked.set(x, b.max_y, Colour::RED);
        }
        for y in b.min_y..=b.max_y {
            marked.set(b.min_x, y, Colour::RED);
            marked.set(b.max_x, y, Colour::RED);
        }
    }

    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a buffer from rows of `#` (black) and `.` (white).
    fn image(rows: &[&str]) -> PixelBuffer {
        PixelBuffer::from_rows(
            rows.iter()
                .map(|row| {
                    row.chars()
                        .map(|c| if c == '#' { Colour::BLACK } else { Colour::WHITE })
                        .collect()
                })
                .collect(),
        )
    }

    #[test]
    fn test_single_region() {
        let regions = closed_regions(&image(&["..", ".."]), |c| c == Colour::WHITE);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 4);
    }

    #[test]
    fn test_diagonals_are_not_connected() {
        let regions = closed_regions(&image(&[".#", "#."]), |c| c == Colour::WHITE);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].pixels(), &[(0, 0)]);
        assert_eq!(regions[1].pixels(), &[(1, 1)]);
    }

    #[test]
    fn test_bounding_box() {
        let regions = closed_regions(
            &image(&["....", ".##.", ".#..", "...."]),
            |c| c == Colour::BLACK,
        );
        assert_eq!(regions.len(), 1);
        assert_eq!(
            regions[0].bounding_box(),
            BoundingBox {
                min_x: 1,
                min_y: 1,
                max_x: 2,
                max_y: 2
            }
        );
    }

    #[test]
    fn test_ring_is_valid_stencil() {
        // outer background plus the enclosed centre
        let ring = image(&[".....", ".###.", ".#.#.", ".###.", "....."]);
        assert_eq!(check_stencil(&ring), StencilReport::Valid { cuts: 1 });
    }

    #[test]
    fn test_islands_are_invalid() {
        let islands = image(&[
            ".......", ".#####.", ".#.#.#.", ".#####.", ".......",
        ]);
        let report = check_stencil(&islands);
        assert!(!report.is_valid());
        match report {
            StencilReport::Invalid { white_regions } => assert_eq!(white_regions.len(), 3),
            other => panic!("expected invalid stencil, got {:?}", other),
        }
    }

    #[test]
    fn test_mark_regions() {
        let img = image(&["....", "....", "...."]);
        let regions = closed_regions(&img, |c| c == Colour::WHITE);
        let marked = mark_regions(&img, &regions);

        assert_eq!(marked.get(0, 0), Some(Colour::RED));
        assert_eq!(marked.get(3, 2), Some(Colour::RED));
        assert_eq!(marked.get(1, 1), Some(Colour::WHITE));
    }

    #[test]
    fn test_large_region_does_not_overflow_stack() {
        let big = PixelBuffer::filled(400, 400, Colour::WHITE);
        let regions = closed_regions(&big, |c| c == Colour::WHITE);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 160_000);
    }
}
