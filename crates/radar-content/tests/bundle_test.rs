//! Checks on the shipped content bundles.

use radar_content::{AsciidocLite, ContentRegistry};
use radar_core::traits::MarkupConverter;
use radar_core::{Dimension, Level, Locale, MeasureKind, RiskVector, TierIndex};

#[test]
fn both_locales_ship_complete_bundles() {
    let registry = ContentRegistry::builtin();
    for locale in Locale::ALL {
        let bundle = registry.bundle(locale).unwrap();
        assert_eq!(bundle.locale(), locale);
        assert_eq!(bundle.dimensions().len(), 5);
        assert_eq!(bundle.tiers().len(), 4);
        assert_eq!(bundle.presets().len(), 6);
        assert_eq!(bundle.docs().sections.len(), 7);
        let counts: Vec<usize> = bundle.mitigations().iter().map(|g| g.measure_count()).collect();
        assert_eq!(counts, vec![5, 5, 6, 6]);
    }
}

#[test]
fn dimension_descriptors_follow_canonical_order() {
    let registry = ContentRegistry::builtin();
    let en = registry.bundle(Locale::En).unwrap();
    let keys: Vec<Dimension> = en.dimensions().iter().map(|d| d.key).collect();
    assert_eq!(keys, Dimension::ALL.to_vec());
    assert_eq!(en.short_labels(), vec!["Code", "Lang", "Deploy", "Data", "Blast"]);
    assert_eq!(
        en.dimension(Dimension::Language).level_description(Level::MAX),
        "Memory-unsafe (C, C++)"
    );

    let de = registry.bundle(Locale::De).unwrap();
    assert_eq!(de.dimension(Dimension::Language).short_label, "Sprache");
}

#[test]
fn presets_are_shared_across_locales() {
    let registry = ContentRegistry::builtin();
    let en = registry.bundle(Locale::En).unwrap();
    let de = registry.bundle(Locale::De).unwrap();
    for (a, b) in en.presets().iter().zip(de.presets()) {
        assert_eq!(a.slug, b.slug);
        assert_eq!(a.values, b.values);
    }

    let payment = en.preset("payment-service").unwrap();
    assert_eq!(payment.values, RiskVector::from_values([4, 1, 2, 4, 3]).unwrap());
    assert_eq!(de.preset("auth-module-fintech").unwrap().name, "Auth-Modul (Fintech)");
    assert!(en.preset("nope").is_err());

    let css = RiskVector::from_values([0, 2, 0, 0, 0]).unwrap();
    assert_eq!(en.preset_matching(&css).map(|p| p.slug.as_str()), Some("css-landing-page"));
    assert!(en.preset_matching(&RiskVector::zero()).is_none());
}

#[test]
fn tier_two_group_mixes_measure_kinds() {
    let registry = ContentRegistry::builtin();
    let en = registry.bundle(Locale::En).unwrap();
    let group = en.mitigation_group(TierIndex::MODERATE);
    assert_eq!(group.title, "Extended Assurance");
    assert_eq!(group.icon, "🔍");
    assert!(group.measures.iter().any(|m| m.kind == MeasureKind::Organizational));
    assert_eq!(en.kind_badges().get(MeasureKind::Probabilistic), "Probabilistic");
}

#[test]
fn german_cumulative_note() {
    let registry = ContentRegistry::builtin();
    let de = registry.bundle(Locale::De).unwrap();
    assert_eq!(
        de.cumulative_note_for(TierIndex::HIGH),
        "Jeder Tier umfasst alle Maßnahmen der niedrigeren Tiers. Tier 3 erfordert alle \
         Maßnahmen von Tier 1\u{2013}2 plus die zusätzlichen Maßnahmen aus \
         „Pflicht-Maßnahmen für hohes Risiko\"."
    );
    assert_eq!(
        de.cumulative_note_for(TierIndex::MINIMAL),
        "Tier 1 erfordert die Maßnahmen aus „Automatische Gates (immer aktiv)\"."
    );
    assert_eq!(de.measure_count_label(1), "1 Maßnahme");
    assert_eq!(de.measure_count_label(5), "5 Maßnahmen");
}

#[test]
fn every_documentation_section_converts() {
    let registry = ContentRegistry::builtin();
    let converter = AsciidocLite;
    for locale in Locale::ALL {
        let bundle = registry.bundle(locale).unwrap();
        let rendered = radar_content::render_documentation(bundle.docs(), &converter).unwrap();
        assert_eq!(rendered.len(), bundle.docs().sections.len());
        assert!(rendered[0].disclaimer);
        assert!(rendered.iter().skip(1).all(|s| !s.disclaimer));
        for section in &rendered {
            assert!(section.html.starts_with("<div class=\"paragraph\">"), "{}", section.id);
        }
        let references = rendered.iter().find(|s| s.id == "references").unwrap();
        assert!(references.html.contains("<strong>Tooling:</strong>"));
        assert!(references.html.contains("target=\"_blank\" rel=\"noopener\">EU AI Act</a>"));
    }
    assert_eq!(converter.name(), "asciidoc-lite");
}
