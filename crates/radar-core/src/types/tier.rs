//! Tier index (0..=3), displayed as "Tier 1" through "Tier 4".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{TIER_COLORS, TIER_COUNT};
use crate::errors::LevelError;

/// Zero-based risk tier. Ordering follows severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TierIndex(u8);

impl TierIndex {
    pub const COUNT: usize = TIER_COUNT;
    pub const MINIMAL: TierIndex = TierIndex(0);
    pub const MODERATE: TierIndex = TierIndex(1);
    pub const HIGH: TierIndex = TierIndex(2);
    pub const CRITICAL: TierIndex = TierIndex(3);

    pub fn new(index: u8) -> Result<Self, LevelError> {
        if usize::from(index) < TIER_COUNT {
            Ok(Self(index))
        } else {
            Err(LevelError::TierOutOfRange { value: index })
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based tier number as shown to users.
    pub fn number(self) -> u8 {
        self.0 + 1
    }

    /// Whether the mitigation group for `group_tier` (1-based) is unlocked.
    /// Groups unlock cumulatively: tier N activates groups 1..=N.
    pub fn unlocks(self, group_tier: u8) -> bool {
        group_tier <= self.number()
    }

    /// Accent color for charts and badges.
    pub fn color(self) -> &'static str {
        TIER_COLORS[self.index()]
    }

    pub fn all() -> impl Iterator<Item = TierIndex> {
        (0..TIER_COUNT as u8).map(TierIndex)
    }
}

impl TryFrom<u8> for TierIndex {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TierIndex> for u8 {
    fn from(tier: TierIndex) -> Self {
        tier.0
    }
}

impl fmt::Display for TierIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.number())
    }
}
