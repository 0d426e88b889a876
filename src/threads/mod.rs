//! Thread buffer building.
//!
//! Lays a colour sequence out as threads: warp threads as vertical strips,
//! weft threads as horizontal strips. The sequence is read cyclically by
//! index, so a thread may wrap around the end of the sequence.

mod slub;

pub use slub::{NoSlub, SeededSlub, SkipSchedule, SkipSource, WARP_ODDS, WEFT_ODDS};

use crate::gradient::ColourSequence;
use crate::types::{Layer, PixelBuffer, WeaveConfig};

/// Build the warp layer: one vertical thread per end.
///
/// Each end draws `thread_width * shots` consecutive colours and stamps
/// them as a strip `thread_width` pixels wide.
pub fn build_warp(
    colours: &ColourSequence,
    cfg: &WeaveConfig,
    slub: &mut dyn SkipSource,
) -> PixelBuffer {
    let (width, height) = cfg.size();
    let mut buffer = PixelBuffer::new(width, height);
    let mut cursor = 0;
    let mut skipped: usize = 0;

    for end in 0..cfg.ends {
        let x0 = end * cfg.thread_width;
        for y in 0..height {
            let colour = colours.at(cursor + y);
            for x in x0..x0 + cfg.thread_width {
                buffer.set(x, y, colour);
            }
        }

        let skip = slub.skip_after(Layer::Warp, height);
        skipped = skipped.saturating_add(skip);
        cursor = advance(cursor, height, skip, colours.len());
    }

    log::debug!(
        "warp: {} ends of {} colours, {} slubbed",
        cfg.ends,
        height,
        skipped
    );
    buffer
}

/// Build the weft layer: one horizontal thread per shot.
///
/// Each shot draws `thread_width * ends` consecutive colours and stamps
/// them as a strip `thread_width` pixels tall.
pub fn build_weft(
    colours: &ColourSequence,
    cfg: &WeaveConfig,
    slub: &mut dyn SkipSource,
) -> PixelBuffer {
    let (width, height) = cfg.size();
    let mut buffer = PixelBuffer::new(width, height);
    let mut cursor = 0;
    let mut skipped: usize = 0;

    for shot in 0..cfg.shots {
        let y0 = shot * cfg.thread_width;
        for x in 0..width {
            let colour = colours.at(cursor + x);
            for y in y0..y0 + cfg.thread_width {
                buffer.set(x, y, colour);
            }
        }

        let skip = slub.skip_after(Layer::Weft, width);
        skipped = skipped.saturating_add(skip);
        cursor = advance(cursor, width, skip, colours.len());
    }

    log::debug!(
        "weft: {} shots of {} colours, {} slubbed",
        cfg.shots,
        width,
        skipped
    );
    buffer
}

/// Move a cyclic cursor past one thread and its slub without overflowing.
fn advance(cursor: usize, thread_len: usize, skip: usize, len: usize) -> usize {
    (cursor + thread_len % len + skip % len) % len
}

/// Preview a thread: one column per colour, tiled `repeats` times to show
/// where the sequence repeats. A repeat count of 0 is treated as 1.
pub fn thread_strip(colours: &ColourSequence, height: usize, repeats: usize) -> PixelBuffer {
    let repeats = repeats.max(1);
    let len = colours.len();
    let mut buffer = PixelBuffer::new(len * repeats, height);

    for x in 0..len * repeats {
        let colour = colours.at(x);
        for y in 0..height {
            buffer.set(x, y, colour);
        }
    }

    buffer
}
