//! Builtin drafts.
//!
//! Classic four-shaft patterns, kept as plain data.

use super::Draft;

struct Preset {
    name: &'static str,
    heddles: &'static [&'static str],
    pedals: &'static [&'static [usize]],
    treadling: &'static [&'static [usize]],
}

const STRAIGHT: &[&str] = &["1000", "0100", "0010", "0001"];
const SINGLE_TIE: &[&[usize]] = &[&[0], &[1], &[2], &[3]];
const TWILL_TIE: &[&[usize]] = &[&[0, 1], &[1, 2], &[2, 3], &[3, 0]];
const STRAIGHT_TREAD: &[&[usize]] = &[&[0], &[1], &[2], &[3]];

const ROSEPATH: &[&str] = &["1010 0000", "0100 0100", "0000 1010", "0001 0001"];

const HONEYSUCKLE: &[&str] = &[
    "1000 1010 0000 0000 0000 1010 00",
    "0100 0101 0100 0000 0101 0100 01",
    "0010 0000 1010 1010 1010 0000 10",
    "0001 0000 0001 0101 0000 0001 00",
];

const PRESETS: &[Preset] = &[
    Preset {
        name: "tabby",
        heddles: STRAIGHT,
        pedals: SINGLE_TIE,
        treadling: &[&[1, 3], &[0, 2]],
    },
    // twill in the threading
    Preset {
        name: "twill-heddles",
        heddles: &["1100", "0110", "0011", "1001"],
        pedals: SINGLE_TIE,
        treadling: STRAIGHT_TREAD,
    },
    // twill in the tie-up
    Preset {
        name: "twill-pedals",
        heddles: STRAIGHT,
        pedals: TWILL_TIE,
        treadling: STRAIGHT_TREAD,
    },
    // twill in the treadling
    Preset {
        name: "twill-treads",
        heddles: STRAIGHT,
        pedals: SINGLE_TIE,
        treadling: &[&[0, 1], &[1, 2], &[2, 3], &[3, 0]],
    },
    Preset {
        name: "rosepath",
        heddles: ROSEPATH,
        pedals: TWILL_TIE,
        treadling: &[&[0], &[1], &[0], &[3], &[2], &[1], &[2], &[3]],
    },
    Preset {
        name: "rosepath-reverse",
        heddles: ROSEPATH,
        pedals: TWILL_TIE,
        treadling: &[&[0], &[1], &[2], &[3], &[2], &[1]],
    },
    Preset {
        name: "honeysuckle",
        heddles: HONEYSUCKLE,
        pedals: TWILL_TIE,
        treadling: &[
            &[0], &[1], &[2], &[3],
            &[0], &[1], &[2], &[3],
            &[0],
            &[3], &[2], &[1], &[0],
            &[3], &[2], &[1],
        ],
    },
];

impl Preset {
    fn to_draft(&self) -> Draft {
        Draft {
            name: self.name.to_string(),
            heddles: self.heddles.iter().map(|row| row.to_string()).collect(),
            pedals: self.pedals.iter().map(|p| p.to_vec()).collect(),
            treadling: self.treadling.iter().map(|s| s.to_vec()).collect(),
        }
    }
}

/// Access to the builtin drafts.
pub struct BuiltinDrafts;

impl BuiltinDrafts {
    /// Get all builtin drafts.
    pub fn all() -> Vec<Draft> {
        PRESETS.iter().map(Preset::to_draft).collect()
    }

    /// Get a builtin draft by name.
    pub fn get(name: &str) -> Option<Draft> {
        PRESETS
            .iter()
            .find(|p| p.name == name)
            .map(Preset::to_draft)
    }

    /// Names of all builtin drafts.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|p| p.name)
    }
}
