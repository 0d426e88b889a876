//! Loom pattern engine.
//!
//! Weaves a warp layer and a weft layer together. For every shot the
//! treadling selects pedals, the pedals raise heddles, and the raised
//! heddles decide per end which layer is visible. The visible layer's
//! pixel block is copied into the cloth at the same coordinates, so the
//! hidden layer at that spot is simply never read.

mod harness;

pub use harness::{Heddle, LoomSetup, Pedal, TreadlingCursor, TreadlingSequence, TreadlingStep};

use crate::error::{Result, WeaveError};
use crate::types::{Layer, PixelBuffer, WeaveConfig};

/// A validated loom, ready to weave.
#[derive(Debug, Clone)]
pub struct Loom {
    setup: LoomSetup,
    cfg: WeaveConfig,
    raised_shows: Layer,

    /// Lift vector for each treadling step.
    lifts: Vec<Vec<bool>>,
}

impl Loom {
    /// Validate a tie-up against the loom geometry.
    ///
    /// Fails with `InvalidTreadling` if the treadling is empty, a heddle does
    /// not describe exactly `cfg.ends` ends, or a pedal or step refers to a
    /// heddle or pedal that does not exist.
    pub fn new(setup: LoomSetup, cfg: WeaveConfig, raised_shows: Layer) -> Result<Self> {
        cfg.validate()?;

        if setup.treadling.is_empty() {
            return Err(WeaveError::InvalidTreadling {
                message: "treadling sequence is empty".to_string(),
                help: Some("Add at least one step of pedal presses".to_string()),
            });
        }

        for (i, heddle) in setup.heddles.iter().enumerate() {
            if heddle.len() != cfg.ends {
                return Err(WeaveError::InvalidTreadling {
                    message: format!(
                        "heddle {} describes {} ends, loom has {}",
                        i,
                        heddle.len(),
                        cfg.ends
                    ),
                    help: Some("Tile the threading to the number of ends".to_string()),
                });
            }
        }

        for (p, pedal) in setup.pedals.iter().enumerate() {
            if let Some(&h) = pedal.heddles().iter().find(|&&h| h >= setup.heddles.len()) {
                return Err(WeaveError::invalid_treadling(format!(
                    "pedal {} is tied to heddle {}, but there are only {} heddles",
                    p,
                    h,
                    setup.heddles.len()
                )));
            }
        }

        for (s, step) in setup.treadling.steps().iter().enumerate() {
            if let Some(&p) = step.pedals().iter().find(|&&p| p >= setup.pedals.len()) {
                return Err(WeaveError::invalid_treadling(format!(
                    "treadling step {} presses pedal {}, but there are only {} pedals",
                    s,
                    p,
                    setup.pedals.len()
                )));
            }
        }

        let lifts = setup
            .treadling
            .steps()
            .iter()
            .map(|step| compute_lift(&setup, step, cfg.ends))
            .collect();

        log::debug!(
            "loom: {} heddles, {} pedals, {} treadling steps, raised ends show the {}",
            setup.heddles.len(),
            setup.pedals.len(),
            setup.treadling.len(),
            raised_shows
        );

        Ok(Self {
            setup,
            cfg,
            raised_shows,
            lifts,
        })
    }

    pub fn config(&self) -> &WeaveConfig {
        &self.cfg
    }

    pub fn setup(&self) -> &LoomSetup {
        &self.setup
    }

    pub fn raised_shows(&self) -> Layer {
        self.raised_shows
    }

    /// Ends raised by treadling step `step` (wrapping past the last step).
    pub fn lift(&self, step: usize) -> &[bool] {
        &self.lifts[step % self.lifts.len()]
    }

    /// The layer visible at an end that is (or is not) raised.
    pub fn visible(&self, raised: bool) -> Layer {
        if raised {
            self.raised_shows
        } else {
            self.raised_shows.opposite()
        }
    }

    /// Weave the two layers into cloth.
    ///
    /// Both buffers must be exactly the loom's size; otherwise fails with
    /// `DimensionMismatch` before any pixel is copied.
    pub fn weave(&self, warp: &PixelBuffer, weft: &PixelBuffer) -> Result<PixelBuffer> {
        let expected = self.cfg.size();
        if warp.size() != expected || weft.size() != expected {
            return Err(WeaveError::DimensionMismatch {
                expected,
                warp: warp.size(),
                weft: weft.size(),
            });
        }

        let tw = self.cfg.thread_width;
        let mut cloth = PixelBuffer::new(expected.0, expected.1);
        let mut cursor = TreadlingCursor::new(self.lifts.len());

        for shot in 0..self.cfg.shots {
            let lift = &self.lifts[cursor.advance()];
            for (end, &raised) in lift.iter().enumerate() {
                let source = match self.visible(raised) {
                    Layer::Warp => warp,
                    Layer::Weft => weft,
                };
                cloth.copy_block(source, end * tw, shot * tw, tw, tw);
            }
        }

        Ok(cloth)
    }

    /// Text drawdown: one line per shot, `#` where the weft shows and `.`
    /// where the warp shows.
    pub fn drawdown(&self) -> String {
        let mut out = String::with_capacity((self.cfg.ends + 1) * self.cfg.shots);
        let mut cursor = TreadlingCursor::new(self.lifts.len());

        for _ in 0..self.cfg.shots {
            for &raised in &self.lifts[cursor.advance()] {
                out.push(match self.visible(raised) {
                    Layer::Weft => '#',
                    Layer::Warp => '.',
                });
            }
            out.push('\n');
        }

        out
    }
}

/// OR together every heddle of every pedal pressed in `step`.
fn compute_lift(setup: &LoomSetup, step: &TreadlingStep, ends: usize) -> Vec<bool> {
    let mut lift = vec![false; ends];
    for &p in step.pedals() {
        for &h in setup.pedals[p].heddles() {
            for (raised, &controls) in lift.iter_mut().zip(setup.heddles[h].controls()) {
                *raised |= controls;
            }
        }
    }
    lift
}

/// Validate a tie-up and weave in one call.
pub fn weave(
    warp: &PixelBuffer,
    weft: &PixelBuffer,
    setup: &LoomSetup,
    cfg: WeaveConfig,
    raised_shows: Layer,
) -> Result<PixelBuffer> {
    Loom::new(setup.clone(), cfg, raised_shows)?.weave(warp, weft)
}
