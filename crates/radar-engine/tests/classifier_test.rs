//! Tier classification against the documented scenarios.

use radar_core::{Dimension, Level, RiskVector, TierIndex};
use radar_engine::classifier::{classify, dominant_dimensions};
use radar_engine::mitigation;
use radar_engine::Assessment;

fn v(values: [u8; 5]) -> RiskVector {
    RiskVector::from_values(values).unwrap()
}

#[test]
fn all_zero_is_tier_zero() {
    assert_eq!(classify(&RiskVector::zero()), TierIndex::MINIMAL);
}

#[test]
fn max_exactly_at_each_boundary() {
    assert_eq!(classify(&v([0, 0, 0, 0, 0])), TierIndex::MINIMAL);
    assert_eq!(classify(&v([1, 0, 0, 0, 0])), TierIndex::MINIMAL);
    assert_eq!(classify(&v([0, 2, 0, 0, 0])), TierIndex::MODERATE);
    assert_eq!(classify(&v([0, 0, 3, 0, 0])), TierIndex::HIGH);
    assert_eq!(classify(&v([0, 0, 0, 4, 0])), TierIndex::CRITICAL);
}

#[test]
fn any_dimension_at_four_dominates() {
    for dimension in Dimension::ALL {
        let vector = RiskVector::zero().with_level(dimension, Level::MAX);
        assert_eq!(classify(&vector), TierIndex::CRITICAL, "{dimension}");
    }
}

#[test]
fn payment_service_unlocks_all_four_groups() {
    let vector = v([4, 1, 2, 4, 3]);
    let assessment = Assessment::evaluate(&vector);
    assert_eq!(assessment.tier, TierIndex::CRITICAL);
    assert_eq!(assessment.max_level, Level::MAX);
    assert_eq!(
        assessment.dominant,
        vec![Dimension::CodeType, Dimension::Data]
    );
    assert_eq!(assessment.required_group_tiers().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    for group_tier in 1..=4 {
        assert!(mitigation::is_group_active(group_tier, assessment.tier));
    }
}

#[test]
fn css_landing_page_unlocks_two_groups() {
    let vector = v([0, 2, 0, 0, 0]);
    let assessment = Assessment::evaluate(&vector);
    assert_eq!(assessment.tier, TierIndex::MODERATE);
    assert_eq!(dominant_dimensions(&vector), vec![Dimension::Language]);
    assert!(mitigation::is_group_active(1, assessment.tier));
    assert!(mitigation::is_group_active(2, assessment.tier));
    assert!(!mitigation::is_group_active(3, assessment.tier));
    assert!(!mitigation::is_group_active(4, assessment.tier));
}

#[test]
fn assessment_serializes_tier_as_index() {
    let assessment = Assessment::evaluate(&v([0, 0, 3, 0, 0]));
    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["tier"], 2);
    assert_eq!(json["max_level"], 3);
    assert_eq!(json["vector"]["deployment"], 3);
    assert_eq!(json["dominant"][0], "deployment");
}
