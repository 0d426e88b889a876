//! Slubbing - irregular advances through a thread's colour sequence.
//!
//! Real yarn never repeats its dye lot exactly. After each thread the
//! builder asks a `SkipSource` how many extra colours to skip before the
//! next thread starts, which hides the exact repeat of the sequence.

use rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

use crate::types::Layer;

/// Default odds of a slub after a warp thread (1 in 6).
pub const WARP_ODDS: u32 = 6;

/// Default odds of a slub after a weft thread (1 in 11).
pub const WEFT_ODDS: u32 = 11;

/// Decides how far to skip through the colour sequence between threads.
pub trait SkipSource {
    /// Extra colours to skip after a `layer` thread of `thread_len` colours.
    fn skip_after(&mut self, layer: Layer, thread_len: usize) -> usize;
}

/// Never skips. Threads follow the sequence exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSlub;

impl SkipSource for NoSlub {
    fn skip_after(&mut self, _layer: Layer, _thread_len: usize) -> usize {
        0
    }
}

/// Random slubbing from a seeded generator.
///
/// With odds of 1 in `n` per thread, skips a span drawn uniformly from
/// `thread_len / 4 ..= thread_len / 2`. The same seed always produces the
/// same skips.
#[derive(Debug, Clone)]
pub struct SeededSlub {
    rng: Xoshiro256Plus,
    warp_odds: u32,
    weft_odds: u32,
}

impl SeededSlub {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256Plus::seed_from_u64(seed),
            warp_odds: WARP_ODDS,
            weft_odds: WEFT_ODDS,
        }
    }

    /// Override the per-thread odds. Zero disables slubbing for that layer.
    pub fn with_odds(mut self, warp_odds: u32, weft_odds: u32) -> Self {
        self.warp_odds = warp_odds;
        self.weft_odds = weft_odds;
        self
    }
}

impl SkipSource for SeededSlub {
    fn skip_after(&mut self, layer: Layer, thread_len: usize) -> usize {
        let odds = match layer {
            Layer::Warp => self.warp_odds,
            Layer::Weft => self.weft_odds,
        };
        if odds == 0 || self.rng.next_u32() % odds != 0 {
            return 0;
        }

        let low = thread_len / 4;
        let high = thread_len / 2;
        let span = (high - low + 1) as u64;
        low + (self.rng.next_u64() % span) as usize
    }
}

/// A pre-drawn list of skips, consumed one per thread in build order.
///
/// Once the list runs out every further skip is zero.
#[derive(Debug, Clone, Default)]
pub struct SkipSchedule {
    skips: Vec<usize>,
    position: usize,
}

impl SkipSchedule {
    pub fn new(skips: Vec<usize>) -> Self {
        Self { skips, position: 0 }
    }

    /// Number of skips not yet consumed.
    pub fn remaining(&self) -> usize {
        self.skips.len().saturating_sub(self.position)
    }
}

impl SkipSource for SkipSchedule {
    fn skip_after(&mut self, _layer: Layer, _thread_len: usize) -> usize {
        let skip = self.skips.get(self.position).copied().unwrap_or(0);
        self.position += 1;
        skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_slub() {
        let mut slub = NoSlub;
        assert_eq!(slub.skip_after(Layer::Warp, 100), 0);
        assert_eq!(slub.skip_after(Layer::Weft, 100), 0);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let draw = |seed| {
            let mut slub = SeededSlub::new(seed);
            (0..200)
                .map(|_| slub.skip_after(Layer::Warp, 64))
                .collect::<Vec<_>>()
        };

        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn test_seeded_skips_in_range() {
        let mut slub = SeededSlub::new(7);
        let skips: Vec<usize> = (0..500).map(|_| slub.skip_after(Layer::Weft, 100)).collect();

        assert!(skips.iter().all(|&s| s == 0 || (25..=50).contains(&s)));
        // 1 in 11 over 500 draws: some skip, most don't
        let hits = skips.iter().filter(|&&s| s > 0).count();
        assert!(hits > 0 && hits < 250, "hits = {}", hits);
    }

    #[test]
    fn test_seeded_always_and_never() {
        let mut always = SeededSlub::new(1).with_odds(1, 1);
        assert!((0..50).all(|_| always.skip_after(Layer::Warp, 40) >= 10));

        let mut never = SeededSlub::new(1).with_odds(0, 0);
        assert!((0..50).all(|_| never.skip_after(Layer::Weft, 40) == 0));
    }

    #[test]
    fn test_schedule_consumed_in_order() {
        let mut schedule = SkipSchedule::new(vec![3, 0, 5]);
        assert_eq!(schedule.remaining(), 3);
        assert_eq!(schedule.skip_after(Layer::Warp, 10), 3);
        assert_eq!(schedule.skip_after(Layer::Weft, 10), 0);
        assert_eq!(schedule.skip_after(Layer::Warp, 10), 5);
        assert_eq!(schedule.skip_after(Layer::Warp, 10), 0);
        assert_eq!(schedule.remaining(), 0);
    }
}
