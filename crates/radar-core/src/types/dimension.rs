//! The five risk dimensions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DIMENSION_COUNT;

/// A risk dimension. Each one is an independent axis of the radar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// What the code does (UI styling up to auth/crypto).
    CodeType,
    /// Type and memory safety of the implementation language.
    Language,
    /// Where the code runs and who is exposed.
    Deployment,
    /// Sensitivity of the data the code touches.
    Data,
    /// Scope and reversibility of a failure.
    BlastRadius,
}

impl Dimension {
    pub const COUNT: usize = DIMENSION_COUNT;

    /// All dimensions, in canonical (axis) order.
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::CodeType,
        Dimension::Language,
        Dimension::Deployment,
        Dimension::Data,
        Dimension::BlastRadius,
    ];

    /// Stable key used in content tables and serialized vectors.
    pub fn key(self) -> &'static str {
        match self {
            Self::CodeType => "codeType",
            Self::Language => "language",
            Self::Deployment => "deployment",
            Self::Data => "data",
            Self::BlastRadius => "blastRadius",
        }
    }

    /// Position on the radar (0 points up).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve a key. Accepts the camelCase key as well as kebab-case and
    /// snake_case spellings (`blast-radius`, `blast_radius`).
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized: String = key
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|d| d.key().to_ascii_lowercase() == normalized)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
