//! Tier classification.
//!
//! Overall risk is the single riskiest dimension, not an average. The
//! maximum level is bucketed into four tiers with boundaries at 1, 2, 3:
//!
//! | max level | tier index |
//! |-----------|------------|
//! | 0, 1      | 0          |
//! | 2         | 1          |
//! | 3         | 2          |
//! | 4+        | 3          |

use radar_core::{Dimension, RiskVector, TierIndex};

/// Classify a risk vector.
pub fn classify(vector: &RiskVector) -> TierIndex {
    tier_for_max(vector.max_level().value())
}

/// Bucket a maximum level. Values above 4 are not validated and land in
/// the top tier.
pub fn tier_for_max(max: u8) -> TierIndex {
    match max {
        0..=1 => TierIndex::MINIMAL,
        2 => TierIndex::MODERATE,
        3 => TierIndex::HIGH,
        _ => TierIndex::CRITICAL,
    }
}

/// Classify unvalidated levels. An empty input is tier 0.
pub fn classify_raw<I>(levels: I) -> TierIndex
where
    I: IntoIterator<Item = u8>,
{
    tier_for_max(levels.into_iter().max().unwrap_or(0))
}

/// Dimensions that hold the maximum level, in canonical order.
/// These are the dimensions that determine the tier.
pub fn dominant_dimensions(vector: &RiskVector) -> Vec<Dimension> {
    let max = vector.max_level();
    vector
        .iter()
        .filter(|(_, level)| *level == max)
        .map(|(dimension, _)| dimension)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(tier_for_max(0), TierIndex::MINIMAL);
        assert_eq!(tier_for_max(1), TierIndex::MINIMAL);
        assert_eq!(tier_for_max(2), TierIndex::MODERATE);
        assert_eq!(tier_for_max(3), TierIndex::HIGH);
        assert_eq!(tier_for_max(4), TierIndex::CRITICAL);
        assert_eq!(tier_for_max(200), TierIndex::CRITICAL);
    }

    #[test]
    fn raw_input_is_not_validated() {
        assert_eq!(classify_raw(Vec::<u8>::new()), TierIndex::MINIMAL);
        assert_eq!(classify_raw([0, 9, 0]), TierIndex::CRITICAL);
    }

    #[test]
    fn dominant_dimensions_lists_every_maximum() {
        let v = RiskVector::from_values([4, 1, 2, 4, 3]).unwrap();
        assert_eq!(
            dominant_dimensions(&v),
            vec![Dimension::CodeType, Dimension::Data]
        );
        assert_eq!(dominant_dimensions(&RiskVector::zero()).len(), 5);
    }
}
