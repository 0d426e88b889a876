//! Colour sequence generation.
//!
//! Turns a sparse list of gradient stops into a dense thread colour
//! sequence by linear per-channel interpolation between neighbouring stops.

use crate::error::{Result, WeaveError};
use crate::types::Colour;

/// A colour anchored at a fraction of the sequence length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position as a fraction of the total length, in `[0, 1]`.
    pub at: f64,
    pub colour: Colour,
}

impl GradientStop {
    pub fn new(at: f64, colour: Colour) -> Self {
        Self { at, colour }
    }
}

impl From<(f64, Colour)> for GradientStop {
    fn from((at, colour): (f64, Colour)) -> Self {
        Self::new(at, colour)
    }
}

/// A validated, sorted list of gradient stops.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    stops: Vec<GradientStop>,
}

impl GradientSpec {
    /// Sort and validate a list of stops.
    ///
    /// Needs at least two stops, each at a finite fraction in `[0, 1]`,
    /// and no two stops at the same fraction.
    pub fn new(stops: impl IntoIterator<Item = GradientStop>) -> Result<Self> {
        let mut stops: Vec<GradientStop> = stops.into_iter().collect();

        if stops.len() < 2 {
            return Err(WeaveError::InvalidSpec {
                message: format!("a gradient needs at least two stops, got {}", stops.len()),
                help: Some("Add a start and an end stop, e.g. [0.0, \"#F00\"] and [1.0, \"#00F\"]".to_string()),
            });
        }

        if let Some(stop) = stops
            .iter()
            .find(|s| !s.at.is_finite() || !(0.0..=1.0).contains(&s.at))
        {
            return Err(WeaveError::invalid_spec(format!(
                "stop position {} is outside 0..1",
                stop.at
            )));
        }

        stops.sort_by(|a, b| a.at.total_cmp(&b.at));

        if let Some(pair) = stops.windows(2).find(|pair| pair[0].at == pair[1].at) {
            return Err(WeaveError::InvalidSpec {
                message: format!("two stops share position {}", pair[0].at),
                help: Some("Stop positions must be distinct".to_string()),
            });
        }

        Ok(Self { stops })
    }

    /// The stops, sorted by position.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// First stop's colour.
    pub fn first(&self) -> Colour {
        self.stops[0].colour
    }

    /// Last stop's colour.
    pub fn last(&self) -> Colour {
        self.stops[self.stops.len() - 1].colour
    }

    /// Split `total` samples between the runs joining neighbouring stops.
    ///
    /// Each run gets its rounded share; the final run takes whatever is left,
    /// so the lengths always sum to `total`.
    pub fn run_lengths(&self, total: usize) -> Vec<usize> {
        let runs = self.stops.len() - 1;
        let mut remaining = total;
        let mut lengths = Vec::with_capacity(runs);

        for pair in self.stops.windows(2).take(runs - 1) {
            let share = ((pair[1].at - pair[0].at) * total as f64).round() as usize;
            let len = share.min(remaining);
            remaining -= len;
            lengths.push(len);
        }
        lengths.push(remaining);

        lengths
    }
}

/// A finite thread colour sequence, read cyclically by the thread builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourSequence {
    colours: Vec<Colour>,
}

impl ColourSequence {
    /// Wrap a list of colours. The list must not be empty.
    pub fn new(colours: Vec<Colour>) -> Result<Self> {
        if colours.is_empty() {
            return Err(WeaveError::invalid_spec("a colour sequence cannot be empty"));
        }
        Ok(Self { colours })
    }

    /// A single-colour thread.
    pub fn solid(colour: Colour) -> Self {
        Self {
            colours: vec![colour],
        }
    }

    /// Number of colours before the sequence repeats.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always false; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Colour at `index`, wrapping past the end.
    pub fn at(&self, index: usize) -> Colour {
        self.colours[index % self.colours.len()]
    }

    /// The colours of one repeat.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }
}

/// Generate exactly `total_length` colours from a gradient.
pub fn generate(spec: &GradientSpec, total_length: usize) -> Result<ColourSequence> {
    if total_length == 0 {
        return Err(WeaveError::InvalidSpec {
            message: "total length must be greater than zero".to_string(),
            help: None,
        });
    }

    let lengths = spec.run_lengths(total_length);
    log::debug!(
        "gradient: {} stops -> {} colours, runs {:?}",
        spec.stops.len(),
        total_length,
        lengths
    );

    let mut colours = Vec::with_capacity(total_length);
    for (pair, &len) in spec.stops.windows(2).zip(&lengths) {
        colours.extend(fade(pair[0].colour, pair[1].colour, Some(len)));
    }

    ColourSequence::new(colours)
}

/// Interpolate from `start` towards `end`.
///
/// Yields `steps` colours, the last of which is `end`; `start` itself is not
/// emitted. With `steps = None` the step count is the largest channel
/// distance, so consecutive colours never repeat.
pub fn fade(start: Colour, end: Colour, steps: Option<usize>) -> Vec<Colour> {
    let steps = steps.unwrap_or_else(|| (start.max_channel_delta(end) as usize).max(1));

    (1..=steps)
        .map(|step| {
            let t = step as f64 / steps as f64;
            Colour::rgb(
                lerp_channel(start.r, end.r, step, steps, t),
                lerp_channel(start.g, end.g, step, steps, t),
                lerp_channel(start.b, end.b, step, steps, t),
            )
        })
        .collect()
}

fn lerp_channel(start: u8, end: u8, step: usize, steps: usize, t: f64) -> u8 {
    if step == steps {
        return end;
    }
    let (start, end) = (start as f64, end as f64);
    (start + (end - start) * t).round().clamp(0.0, 255.0) as u8
}
