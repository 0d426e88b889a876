//! Weave documents (`*.weave.yaml`).
//!
//! A weave document describes one woven image: loom geometry, the draft,
//! the warp and weft threads, and optional slubbing. Rendering a document
//! runs the whole pipeline from gradient stops to cloth.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::draft::{BuiltinDrafts, Draft};
use crate::error::{Result, WeaveError};
use crate::gradient::{generate, ColourSequence, GradientSpec, GradientStop};
use crate::loom::Loom;
use crate::threads::{build_warp, build_weft, NoSlub, SeededSlub, SkipSource, WARP_ODDS, WEFT_ODDS};
use crate::types::{Colour, Layer, PixelBuffer, WeaveConfig};

/// File suffix for weave documents.
pub const DOCUMENT_SUFFIXES: &[&str] = &[".weave.yaml", ".weave.yml"];

/// The colours of one thread layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThreadSpec {
    /// A single-colour thread.
    Solid { colour: Colour },

    /// A gradient of `length` colours through the given stops.
    Gradient {
        length: usize,
        stops: Vec<(f64, Colour)>,
    },
}

impl ThreadSpec {
    /// Generate the thread's colour sequence.
    pub fn colours(&self) -> Result<ColourSequence> {
        match self {
            ThreadSpec::Solid { colour } => Ok(ColourSequence::solid(*colour)),
            ThreadSpec::Gradient { length, stops } => {
                let spec = GradientSpec::new(stops.iter().copied().map(GradientStop::from))?;
                generate(&spec, *length)
            }
        }
    }
}

/// A builtin draft name or an inline draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftRef {
    Builtin(String),
    Inline(Draft),
}

/// Slubbing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlubSpec {
    pub seed: u64,

    #[serde(default = "default_warp_odds")]
    pub warp_odds: u32,

    #[serde(default = "default_weft_odds")]
    pub weft_odds: u32,
}

fn default_warp_odds() -> u32 {
    WARP_ODDS
}

fn default_weft_odds() -> u32 {
    WEFT_ODDS
}

/// A weave document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaveDocument {
    /// Output name. Defaults to the file name without its suffix.
    #[serde(default)]
    pub name: Option<String>,

    pub thread_width: usize,
    pub ends: usize,
    pub shots: usize,

    pub draft: DraftRef,

    /// Which layer shows where an end is raised.
    #[serde(default)]
    pub raised_shows: Layer,

    pub warp: ThreadSpec,
    pub weft: ThreadSpec,

    /// Slubbing; absent means threads follow their sequence exactly.
    #[serde(default)]
    pub slub: Option<SlubSpec>,

    /// Default integer upscale for output.
    #[serde(default)]
    pub scale: Option<u32>,
}

/// Overrides applied when rendering a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Replace the document's slub seed (enables slubbing if it was off).
    pub seed: Option<u64>,

    /// Disable slubbing regardless of the document.
    pub no_slub: bool,
}

/// Metadata about a render, written beside the image with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaveSummary {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub thread_width: usize,
    pub ends: usize,
    pub shots: usize,
    pub draft: String,
    pub raised_shows: Layer,
    pub seed: Option<u64>,
    pub warp_repeat: usize,
    pub weft_repeat: usize,
}

/// Everything produced by rendering a document.
#[derive(Debug, Clone)]
pub struct WeaveOutput {
    pub warp_colours: ColourSequence,
    pub weft_colours: ColourSequence,
    pub warp: PixelBuffer,
    pub weft: PixelBuffer,
    pub cloth: PixelBuffer,
    pub summary: WeaveSummary,
}

impl WeaveDocument {
    /// Load a document from a file, naming it after the file if unnamed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| WeaveError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read weave document: {}", e),
        })?;

        let mut doc = Self::parse(&content)?;
        if doc.name.is_none() {
            doc.name = document_stem(path);
        }
        Ok(doc)
    }

    /// Parse a document from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| WeaveError::Parse {
            message: format!("Invalid weave document: {}", e),
            help: Some("Check the document's YAML syntax".to_string()),
        })
    }

    /// The document's name, or `weave` if it has none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("weave")
    }

    /// Loom geometry.
    pub fn config(&self) -> Result<WeaveConfig> {
        WeaveConfig::new(self.thread_width, self.ends, self.shots)
    }

    /// Resolve the draft reference to a draft.
    pub fn resolve_draft(&self) -> Result<Draft> {
        match &self.draft {
            DraftRef::Inline(draft) => Ok(draft.clone()),
            DraftRef::Builtin(name) => BuiltinDrafts::get(name).ok_or_else(|| WeaveError::Parse {
                message: format!("Unknown draft: {}", name),
                help: Some(format!(
                    "Builtin drafts: {}",
                    BuiltinDrafts::names().collect::<Vec<_>>().join(", ")
                )),
            }),
        }
    }

    /// Build the loom for this document.
    pub fn loom(&self) -> Result<Loom> {
        let cfg = self.config()?;
        let setup = self.resolve_draft()?.setup(cfg.ends)?;
        Loom::new(setup, cfg, self.raised_shows)
    }

    /// Run the full pipeline.
    ///
    /// Everything is validated before any pixel work starts.
    pub fn render(&self, options: RenderOptions) -> Result<WeaveOutput> {
        let loom = self.loom()?;
        let cfg = *loom.config();
        let warp_colours = self.warp.colours()?;
        let weft_colours = self.weft.colours()?;

        let slub = if options.no_slub {
            None
        } else {
            match (self.slub, options.seed) {
                (Some(spec), Some(seed)) => Some(SlubSpec { seed, ..spec }),
                (None, Some(seed)) => Some(SlubSpec {
                    seed,
                    warp_odds: WARP_ODDS,
                    weft_odds: WEFT_ODDS,
                }),
                (spec, None) => spec,
            }
        };

        let mut source: Box<dyn SkipSource> = match slub {
            Some(spec) => Box::new(SeededSlub::new(spec.seed).with_odds(spec.warp_odds, spec.weft_odds)),
            None => Box::new(NoSlub),
        };

        let warp = build_warp(&warp_colours, &cfg, source.as_mut());
        let weft = build_weft(&weft_colours, &cfg, source.as_mut());
        let cloth = loom.weave(&warp, &weft)?;

        let draft = match &self.draft {
            DraftRef::Builtin(name) => name.clone(),
            DraftRef::Inline(draft) if !draft.name.is_empty() => draft.name.clone(),
            DraftRef::Inline(_) => "inline".to_string(),
        };

        let summary = WeaveSummary {
            name: self.name().to_string(),
            width: cloth.width(),
            height: cloth.height(),
            thread_width: cfg.thread_width,
            ends: cfg.ends,
            shots: cfg.shots,
            draft,
            raised_shows: self.raised_shows,
            seed: slub.map(|s| s.seed),
            warp_repeat: warp_colours.len(),
            weft_repeat: weft_colours.len(),
        };

        Ok(WeaveOutput {
            warp_colours,
            weft_colours,
            warp,
            weft,
            cloth,
            summary,
        })
    }
}

/// Check if a path names a weave document.
pub fn is_document(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| DOCUMENT_SUFFIXES.iter().any(|s| name.ends_with(s)))
}

/// File name with the document suffix removed.
fn document_stem(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let stem = DOCUMENT_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .or_else(|| path.file_stem().and_then(|s| s.to_str()))?;
    Some(stem.to_string())
}
