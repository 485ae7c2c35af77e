//! One evaluation of a risk vector.

use serde::Serialize;

use radar_core::{Dimension, Level, RiskVector, TierIndex};

use crate::classifier;

/// The result of classifying a vector. Recomputed from scratch on every
/// change; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub vector: RiskVector,
    pub tier: TierIndex,
    pub max_level: Level,
    /// Dimensions at the maximum level. These set the tier.
    pub dominant: Vec<Dimension>,
}

impl Assessment {
    pub fn evaluate(vector: &RiskVector) -> Self {
        let assessment = Self {
            vector: *vector,
            tier: classifier::classify(vector),
            max_level: vector.max_level(),
            dominant: classifier::dominant_dimensions(vector),
        };
        tracing::debug!(
            tier = assessment.tier.number(),
            max_level = assessment.max_level.value(),
            "assessment computed"
        );
        assessment
    }

    /// Tier numbers (1-based) of the mitigation groups this assessment requires.
    pub fn required_group_tiers(&self) -> std::ops::RangeInclusive<u8> {
        1..=self.tier.number()
    }
}
