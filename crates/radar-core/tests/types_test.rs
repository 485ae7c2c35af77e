//! Tests for the domain types.

use std::collections::BTreeMap;

use radar_core::errors::{LevelError, RadarErrorCode};
use radar_core::{Dimension, Level, Locale, MeasureKind, RiskVector, Theme, TierIndex};

#[test]
fn level_rejects_values_above_four() {
    assert!(Level::new(4).is_ok());
    assert_eq!(Level::new(5), Err(LevelError::OutOfRange { value: 5 }));
    assert_eq!(
        Level::new(9).unwrap_err().error_code(),
        "LEVEL_OUT_OF_RANGE"
    );
}

#[test]
fn level_saturating_clamps_like_a_slider() {
    assert_eq!(Level::saturating(-3), Level::MIN);
    assert_eq!(Level::saturating(2).value(), 2);
    assert_eq!(Level::saturating(17), Level::MAX);
    assert_eq!(Level::MAX.raised(), Level::MAX);
}

#[test]
fn vector_from_values_and_get() {
    let v = RiskVector::from_values([4, 1, 2, 4, 3]).unwrap();
    assert_eq!(v.get(Dimension::CodeType).value(), 4);
    assert_eq!(v.get(Dimension::Language).value(), 1);
    assert_eq!(v.get(Dimension::BlastRadius).value(), 3);
    assert_eq!(v.max_level(), Level::MAX);
    assert!(RiskVector::from_values([0, 0, 5, 0, 0]).is_err());
}

#[test]
fn with_level_leaves_original_untouched() {
    let v = RiskVector::zero();
    let w = v.with_level(Dimension::Data, Level::new(3).unwrap());
    assert_eq!(v.get(Dimension::Data), Level::MIN);
    assert_eq!(w.get(Dimension::Data).value(), 3);
}

#[test]
fn vector_from_map_requires_every_dimension() {
    let mut map = BTreeMap::new();
    map.insert("codeType".to_string(), 1u8);
    map.insert("language".to_string(), 2u8);
    map.insert("deployment".to_string(), 0u8);
    map.insert("data".to_string(), 0u8);
    assert_eq!(
        RiskVector::from_map(&map),
        Err(LevelError::MissingDimension {
            key: "blastRadius".to_string()
        })
    );

    map.insert("blast-radius".to_string(), 3u8);
    let v = RiskVector::from_map(&map).unwrap();
    assert_eq!(v.get(Dimension::BlastRadius).value(), 3);

    map.insert("severity".to_string(), 1u8);
    assert!(matches!(
        RiskVector::from_map(&map),
        Err(LevelError::UnknownDimension { .. })
    ));
}

#[test]
fn vector_serializes_with_camel_case_keys() {
    let v = RiskVector::from_values([0, 2, 0, 0, 0]).unwrap();
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(
        json,
        r#"{"codeType":0,"language":2,"deployment":0,"data":0,"blastRadius":0}"#
    );
    let back: RiskVector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);

    let bad = r#"{"codeType":7,"language":2,"deployment":0,"data":0,"blastRadius":0}"#;
    assert!(serde_json::from_str::<RiskVector>(bad).is_err());
}

#[test]
fn tier_number_and_cumulative_unlock() {
    assert_eq!(TierIndex::MINIMAL.number(), 1);
    assert_eq!(TierIndex::CRITICAL.number(), 4);
    assert!(TierIndex::MODERATE.unlocks(1));
    assert!(TierIndex::MODERATE.unlocks(2));
    assert!(!TierIndex::MODERATE.unlocks(3));
    assert!(TierIndex::new(4).is_err());
    assert_eq!(TierIndex::HIGH.to_string(), "Tier 3");
    assert_eq!(TierIndex::CRITICAL.color(), "#ef4444");
}

#[test]
fn locale_detection_and_toggle() {
    assert_eq!(Locale::from_language_tag("de_DE.UTF-8"), Locale::De);
    assert_eq!(Locale::from_language_tag("de-AT"), Locale::De);
    assert_eq!(Locale::from_language_tag("en_US"), Locale::En);
    assert_eq!(Locale::from_language_tag("fr_FR"), Locale::En);
    assert_eq!(Locale::from_code("fr"), None);
    assert_eq!(Locale::De.toggled(), Locale::En);
}

#[test]
fn theme_codes_and_toggle() {
    assert_eq!(Theme::from_code("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_code("sepia"), None);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert!(Theme::Dark.is_dark());
}

#[test]
fn measure_kind_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&MeasureKind::Organizational).unwrap(),
        "\"organizational\""
    );
}
