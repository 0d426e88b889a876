//! Weaving drafts: the tie-up and treadling of a pattern.
//!
//! A draft describes one threading repeat. Heddle rows are written as
//! strings of `1`/`0` (or `x`/`.`); when the loom is set up they are
//! repeated across however many ends the cloth has.

mod builtin;

pub use builtin::BuiltinDrafts;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WeaveError};
use crate::loom::{Heddle, LoomSetup, Pedal, TreadlingSequence, TreadlingStep};

/// A weaving draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Draft name.
    #[serde(default)]
    pub name: String,

    /// Threading repeat, one row per heddle.
    pub heddles: Vec<String>,

    /// Tie-up: the heddles each pedal raises.
    pub pedals: Vec<Vec<usize>>,

    /// The pedals pressed on each shot, repeated for the whole cloth.
    pub treadling: Vec<Vec<usize>>,
}

impl Draft {
    /// Parse a draft from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| WeaveError::Parse {
            message: format!("Invalid draft: {}", e),
            help: Some("A draft needs heddles, pedals and treadling".to_string()),
        })
    }

    /// Width of the threading repeat in ends.
    pub fn repeat(&self) -> usize {
        self.heddles
            .iter()
            .map(|row| row.chars().filter(|c| !is_separator(*c)).count())
            .max()
            .unwrap_or(0)
    }

    /// Parse the heddle rows without tiling them.
    ///
    /// Every row must cover the same number of ends.
    pub fn heddles(&self) -> Result<Vec<Heddle>> {
        let heddles = self
            .heddles
            .iter()
            .enumerate()
            .map(|(i, row)| parse_heddle(i, row))
            .collect::<Result<Vec<_>>>()?;

        if let Some(first) = heddles.first() {
            if let Some((i, row)) = heddles
                .iter()
                .enumerate()
                .find(|(_, h)| h.len() != first.len())
            {
                return Err(WeaveError::InvalidTreadling {
                    message: format!(
                        "heddle {} covers {} ends, heddle 0 covers {}",
                        i,
                        row.len(),
                        first.len()
                    ),
                    help: Some("Every heddle row must be as long as the threading repeat".to_string()),
                });
            }
        }

        Ok(heddles)
    }

    /// Build a loom setup for `ends` warp ends, tiling the threading repeat.
    pub fn setup(&self, ends: usize) -> Result<LoomSetup> {
        let heddles = self
            .heddles()?
            .iter()
            .map(|heddle| heddle.tiled(ends))
            .collect();

        let pedals = self.pedals.iter().cloned().map(Pedal::new).collect();
        let treadling = TreadlingSequence::new(
            self.treadling
                .iter()
                .cloned()
                .map(TreadlingStep::new)
                .collect(),
        );

        Ok(LoomSetup::new(heddles, pedals, treadling))
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '_'
}

fn parse_heddle(index: usize, row: &str) -> Result<Heddle> {
    let mut controls = Vec::with_capacity(row.len());
    for c in row.chars().filter(|c| !is_separator(*c)) {
        match c {
            '1' | 'x' | 'X' | '#' => controls.push(true),
            '0' | '.' | '-' => controls.push(false),
            other => {
                return Err(WeaveError::Parse {
                    message: format!("Invalid character '{}' in heddle {}", other, index),
                    help: Some("Use 1/x for lifted ends and 0/. for others".to_string()),
                })
            }
        }
    }

    if controls.is_empty() {
        return Err(WeaveError::invalid_treadling(format!(
            "heddle {} controls no ends",
            index
        )));
    }

    Ok(Heddle::new(controls))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loom::Loom;
    use crate::types::{Layer, WeaveConfig};

    #[test]
    fn test_parse_draft_yaml() {
        let yaml = r#"
name: plain
heddles:
  - "1 0 1 0"
  - "0,1,0,1"
pedals: [[0], [1]]
treadling: [[0], [1]]
"#;
        let draft = Draft::parse(yaml).unwrap();
        assert_eq!(draft.name, "plain");
        assert_eq!(draft.repeat(), 4);

        let heddles = draft.heddles().unwrap();
        assert_eq!(heddles[0], Heddle::from_bits(&[1, 0, 1, 0]));
        assert_eq!(heddles[1], Heddle::from_bits(&[0, 1, 0, 1]));
    }

    #[test]
    fn test_setup_tiles_threading() {
        let draft = Draft {
            name: "tiny".to_string(),
            heddles: vec!["x..".to_string()],
            pedals: vec![vec![0]],
            treadling: vec![vec![0]],
        };

        let setup = draft.setup(7).unwrap();
        assert_eq!(setup.heddles[0], Heddle::from_bits(&[1, 0, 0, 1, 0, 0, 1]));

        let cfg = WeaveConfig::new(1, 7, 1).unwrap();
        assert!(Loom::new(setup, cfg, Layer::Weft).is_ok());
    }

    #[test]
    fn test_bad_heddle_rows() {
        let mut draft = Draft {
            name: String::new(),
            heddles: vec!["10z0".to_string()],
            pedals: vec![vec![0]],
            treadling: vec![vec![0]],
        };
        assert!(matches!(draft.setup(4), Err(WeaveError::Parse { .. })));

        draft.heddles = vec![" , ".to_string()];
        assert!(matches!(
            draft.setup(4),
            Err(WeaveError::InvalidTreadling { .. })
        ));
    }

    #[test]
    fn test_uneven_heddle_rows_rejected() {
        let draft = Draft {
            name: String::new(),
            heddles: vec!["10".to_string(), "001".to_string()],
            pedals: vec![vec![0, 1]],
            treadling: vec![vec![0]],
        };

        assert!(matches!(
            draft.setup(6),
            Err(WeaveError::InvalidTreadling { .. })
        ));
        assert!(draft.heddles().is_err());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(Draft::parse("heddles: [\"10\"]").is_err());
    }
}
