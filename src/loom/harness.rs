//! The loom's shedding mechanism: heddles, pedals and the treadling.

/// A heddle frame: which warp ends it lifts when raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heddle {
    controls: Vec<bool>,
}

impl Heddle {
    pub fn new(controls: Vec<bool>) -> Self {
        Self { controls }
    }

    /// Build from 0/1 flags, e.g. `Heddle::from_bits(&[1, 1, 0, 0])`.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self::new(bits.iter().map(|&b| b != 0).collect())
    }

    /// Number of ends this heddle describes.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Whether this heddle lifts `end`.
    pub fn lifts(&self, end: usize) -> bool {
        self.controls.get(end).copied().unwrap_or(false)
    }

    pub fn controls(&self) -> &[bool] {
        &self.controls
    }

    /// Repeat the heddle's pattern across `ends` ends.
    pub fn tiled(&self, ends: usize) -> Self {
        if self.controls.is_empty() {
            return self.clone();
        }
        Self::new((0..ends).map(|e| self.controls[e % self.controls.len()]).collect())
    }
}

/// A pedal (treadle): pressing it raises every heddle tied to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pedal {
    /// Indices into the loom's heddle list.
    heddles: Vec<usize>,
}

impl Pedal {
    pub fn new(heddles: Vec<usize>) -> Self {
        Self { heddles }
    }

    pub fn heddles(&self) -> &[usize] {
        &self.heddles
    }
}

/// The pedals pressed together for one shot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreadlingStep {
    /// Indices into the loom's pedal list.
    pedals: Vec<usize>,
}

impl TreadlingStep {
    pub fn new(pedals: Vec<usize>) -> Self {
        Self { pedals }
    }

    pub fn pedals(&self) -> &[usize] {
        &self.pedals
    }
}

/// The repeating schedule of pedal presses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreadlingSequence {
    steps: Vec<TreadlingStep>,
}

impl TreadlingSequence {
    pub fn new(steps: Vec<TreadlingStep>) -> Self {
        Self { steps }
    }

    /// One step per shot, each pressing the listed pedals.
    pub fn from_indices(steps: &[&[usize]]) -> Self {
        Self::new(steps.iter().map(|s| TreadlingStep::new(s.to_vec())).collect())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[TreadlingStep] {
        &self.steps
    }
}

/// A complete tie-up: heddles, the pedals tied to them, and the treadling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoomSetup {
    pub heddles: Vec<Heddle>,
    pub pedals: Vec<Pedal>,
    pub treadling: TreadlingSequence,
}

impl LoomSetup {
    pub fn new(heddles: Vec<Heddle>, pedals: Vec<Pedal>, treadling: TreadlingSequence) -> Self {
        Self {
            heddles,
            pedals,
            treadling,
        }
    }
}

/// Position in the treadling, advanced once per shot and wrapping at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreadlingCursor {
    position: usize,
    len: usize,
}

impl TreadlingCursor {
    /// A cursor over a sequence of `len` steps. `len` must be non-zero.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "treadling cursor over an empty sequence");
        Self { position: 0, len }
    }

    /// Current step index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Return the current step index and move to the next one.
    pub fn advance(&mut self) -> usize {
        let step = self.position;
        self.position = (self.position + 1) % self.len;
        step
    }
}
