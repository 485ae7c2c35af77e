//! Dimension level in `0..=4`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{LEVEL_COUNT, MAX_LEVEL};
use crate::errors::LevelError;

/// A level on one dimension. Always within `0..=4`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const COUNT: usize = LEVEL_COUNT;
    pub const MIN: Level = Level(0);
    pub const MAX: Level = Level(MAX_LEVEL);

    /// Checked constructor.
    pub fn new(value: u8) -> Result<Self, LevelError> {
        if value <= MAX_LEVEL {
            Ok(Self(value))
        } else {
            Err(LevelError::OutOfRange {
                value: i64::from(value),
            })
        }
    }

    /// Clamp any integer into range, the way a slider control does.
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(0, i64::from(MAX_LEVEL)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All five levels in ascending order.
    pub fn all() -> impl Iterator<Item = Level> {
        (0..=MAX_LEVEL).map(Level)
    }

    /// One step up, saturating at 4.
    pub fn raised(self) -> Self {
        Self(self.0.saturating_add(1).min(MAX_LEVEL))
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
