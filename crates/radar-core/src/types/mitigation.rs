//! Mitigation measures and the tier groups they belong to.

use serde::{Deserialize, Serialize};

/// How a measure detects problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureKind {
    /// Guaranteed detection within its scope (type checkers, SAST, sandboxing).
    Deterministic,
    /// Finds much but not everything (AI review, fuzzing).
    Probabilistic,
    /// Needs people; scales worst.
    Organizational,
}

impl MeasureKind {
    pub const ALL: [MeasureKind; 3] = [
        MeasureKind::Deterministic,
        MeasureKind::Probabilistic,
        MeasureKind::Organizational,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Deterministic => "deterministic",
            Self::Probabilistic => "probabilistic",
            Self::Organizational => "organizational",
        }
    }

    /// Badge (foreground, background) colors.
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            Self::Deterministic => ("#38bdf8", "#0c4a6e"),
            Self::Probabilistic => ("#a78bfa", "#3b0764"),
            Self::Organizational => ("#fb923c", "#7c2d12"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MitigationMeasure {
    pub name: String,
    #[serde(alias = "desc")]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: MeasureKind,
}

/// The measures a tier adds on top of the lower tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MitigationGroup {
    /// One-based tier number (1..=4).
    pub tier: u8,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    pub measures: Vec<MitigationMeasure>,
}

impl MitigationGroup {
    pub fn measure_count(&self) -> usize {
        self.measures.len()
    }
}
