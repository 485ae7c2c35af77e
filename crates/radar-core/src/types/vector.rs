//! Risk vector: one level per dimension.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Dimension, Level};
use crate::constants::{DIMENSION_COUNT, INITIAL_LEVELS};
use crate::errors::LevelError;

/// Levels for all five dimensions. Immutable per evaluation;
/// `with_level` produces the next vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "VectorRepr", into = "VectorRepr")]
pub struct RiskVector {
    levels: [Level; DIMENSION_COUNT],
}

impl RiskVector {
    pub fn new(levels: [Level; DIMENSION_COUNT]) -> Self {
        Self { levels }
    }

    /// All dimensions at level 0.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The vector a new session starts from.
    pub fn initial() -> Self {
        Self::from_values(INITIAL_LEVELS).unwrap_or_default()
    }

    /// Build from raw values in canonical dimension order.
    pub fn from_values(values: [u8; DIMENSION_COUNT]) -> Result<Self, LevelError> {
        let mut levels = [Level::MIN; DIMENSION_COUNT];
        for (slot, value) in levels.iter_mut().zip(values) {
            *slot = Level::new(value)?;
        }
        Ok(Self { levels })
    }

    /// Build from a key → value map. Every dimension must be present;
    /// unknown keys are rejected.
    pub fn from_map(map: &BTreeMap<String, u8>) -> Result<Self, LevelError> {
        let mut levels: [Option<Level>; DIMENSION_COUNT] = [None; DIMENSION_COUNT];
        for (key, value) in map {
            let dimension = Dimension::from_key(key)
                .ok_or_else(|| LevelError::UnknownDimension { key: key.clone() })?;
            levels[dimension.index()] = Some(Level::new(*value)?);
        }
        let mut out = [Level::MIN; DIMENSION_COUNT];
        for dimension in Dimension::ALL {
            out[dimension.index()] =
                levels[dimension.index()].ok_or_else(|| LevelError::MissingDimension {
                    key: dimension.key().to_string(),
                })?;
        }
        Ok(Self { levels: out })
    }

    pub fn get(&self, dimension: Dimension) -> Level {
        self.levels[dimension.index()]
    }

    /// Copy of this vector with one dimension replaced.
    #[must_use]
    pub fn with_level(mut self, dimension: Dimension, level: Level) -> Self {
        self.levels[dimension.index()] = level;
        self
    }

    pub fn levels(&self) -> &[Level; DIMENSION_COUNT] {
        &self.levels
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Level)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// The riskiest level across all dimensions.
    pub fn max_level(&self) -> Level {
        self.levels.iter().copied().max().unwrap_or(Level::MIN)
    }

    pub fn to_map(&self) -> BTreeMap<String, u8> {
        self.iter()
            .map(|(d, l)| (d.key().to_string(), l.value()))
            .collect()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct VectorRepr {
    code_type: Level,
    language: Level,
    deployment: Level,
    data: Level,
    blast_radius: Level,
}

impl From<VectorRepr> for RiskVector {
    fn from(r: VectorRepr) -> Self {
        Self::new([r.code_type, r.language, r.deployment, r.data, r.blast_radius])
    }
}

impl From<RiskVector> for VectorRepr {
    fn from(v: RiskVector) -> Self {
        Self {
            code_type: v.get(Dimension::CodeType),
            language: v.get(Dimension::Language),
            deployment: v.get(Dimension::Deployment),
            data: v.get(Dimension::Data),
            blast_radius: v.get(Dimension::BlastRadius),
        }
    }
}
