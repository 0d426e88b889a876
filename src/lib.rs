//! weaver - Loom weave simulation
//!
//! A library for weaving raster images from a loom draft: gradient thread
//! colours are laid out as warp and weft layers, and a heddle/pedal
//! treadling decides which layer shows at every crossing. Also includes a
//! small stencil checker for black-and-white images.

pub mod cli;
pub mod discovery;
pub mod document;
pub mod draft;
pub mod error;
pub mod gradient;
pub mod logging;
pub mod loom;
pub mod output;
pub mod render;
pub mod stencil;
pub mod threads;
pub mod types;

pub use document::{RenderOptions, ThreadSpec, WeaveDocument, WeaveOutput, WeaveSummary};
pub use draft::{BuiltinDrafts, Draft};
pub use error::{Result, WeaveError};
pub use gradient::{fade, generate, ColourSequence, GradientSpec, GradientStop};
pub use loom::{weave, Heddle, Loom, LoomSetup, Pedal, TreadlingSequence, TreadlingStep};
pub use render::{read_png, scale_pixels, write_png};
pub use stencil::{check_stencil, closed_regions, BoundingBox, Region, StencilReport};
pub use threads::{build_warp, build_weft, thread_strip, NoSlub, SeededSlub, SkipSchedule, SkipSource};
pub use types::{Colour, Layer, PixelBuffer, WeaveConfig};
