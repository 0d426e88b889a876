//! Loom geometry and shed polarity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WeaveError};

/// Geometry of a woven image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaveConfig {
    /// Pixels per thread, in both directions.
    pub thread_width: usize,

    /// Number of warp threads (columns of blocks).
    pub ends: usize,

    /// Number of weft picks (rows of blocks).
    pub shots: usize,
}

impl WeaveConfig {
    /// Create a validated config. Every field must be non-zero.
    pub fn new(thread_width: usize, ends: usize, shots: usize) -> Result<Self> {
        let config = Self {
            thread_width,
            ends,
            shots,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is non-zero and the image size is representable.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("thread_width", self.thread_width),
            ("ends", self.ends),
            ("shots", self.shots),
        ] {
            if value == 0 {
                return Err(WeaveError::Parse {
                    message: format!("{} must be greater than zero", field),
                    help: None,
                });
            }
        }

        let too_large = || WeaveError::Parse {
            message: format!(
                "{} ends by {} shots at thread width {} is too large",
                self.ends, self.shots, self.thread_width
            ),
            help: Some("Reduce the thread width, ends or shots".to_string()),
        };
        let width = self.thread_width.checked_mul(self.ends).ok_or_else(too_large)?;
        let height = self.thread_width.checked_mul(self.shots).ok_or_else(too_large)?;
        width.checked_mul(height).ok_or_else(too_large)?;
        Ok(())
    }

    /// Width of the woven image in pixels.
    pub fn width(&self) -> usize {
        self.thread_width * self.ends
    }

    /// Height of the woven image in pixels.
    pub fn height(&self) -> usize {
        self.thread_width * self.shots
    }

    /// Dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }
}

/// One of the two thread layers of the cloth.
///
/// Used as the shed polarity: which layer is visible where an end is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Warp,
    #[default]
    Weft,
}

impl Layer {
    /// The other layer.
    pub fn opposite(self) -> Self {
        match self {
            Layer::Warp => Layer::Weft,
            Layer::Weft => Layer::Warp,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Warp => write!(f, "warp"),
            Layer::Weft => write!(f, "weft"),
        }
    }
}

impl FromStr for Layer {
    type Err = WeaveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warp" => Ok(Layer::Warp),
            "weft" => Ok(Layer::Weft),
            other => Err(WeaveError::Parse {
                message: format!("Unknown layer: {}", other),
                help: Some("Use 'warp' or 'weft'".to_string()),
            }),
        }
    }
}
