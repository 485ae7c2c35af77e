//! Localized content bundle: every string, table, and document the radar
//! shows for one locale.
//!
//! A bundle is only obtainable through [`ContentBundle::from_toml`] (or
//! deserialization, which runs the same checks), so accessors may rely on
//! the structural invariants enforced by [`ContentBundle::validate`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use radar_core::constants::{DIMENSION_COUNT, LEVEL_COUNT, TIER_COUNT};
use radar_core::errors::ContentError;
use radar_core::{Dimension, Level, Locale, MeasureKind, MitigationGroup, RiskVector, TierIndex};

/// Id of the documentation section shown with a warning treatment.
pub const DISCLAIMER_SECTION_ID: &str = "disclaimer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiStrings {
    pub title: String,
    pub subtitle: String,
    pub low: String,
    pub high: String,
    pub active: String,
    pub cumulative: String,
    /// Template used for tier 1. Placeholder: `{title}`.
    pub cumulative_note_first: String,
    /// Template used for tier 2 and up. Placeholders: `{tier}`, `{range}`, `{title}`.
    pub cumulative_note: String,
    pub mitigation_heading: String,
    pub measures: String,
    pub measure: String,
    pub docs_button: String,
    pub close_button: String,
    pub language_switch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindBadges {
    pub deterministic: String,
    pub probabilistic: String,
    pub organizational: String,
}

impl KindBadges {
    pub fn get(&self, kind: MeasureKind) -> &str {
        match kind {
            MeasureKind::Deterministic => &self.deterministic,
            MeasureKind::Probabilistic => &self.probabilistic,
            MeasureKind::Organizational => &self.organizational,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterStrings {
    pub github: String,
    pub full_docs: String,
    pub full_docs_href: String,
    pub made_by: String,
}

/// Labels for one dimension and a description of each of its levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDescriptor {
    pub key: Dimension,
    pub label: String,
    pub short_label: String,
    pub levels: Vec<String>,
}

impl DimensionDescriptor {
    pub fn level_description(&self, level: Level) -> &str {
        self.levels.get(level.index()).map_or("", String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDescriptor {
    pub label: String,
    pub description: String,
}

/// A named risk vector shipped with the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub slug: String,
    pub name: String,
    pub values: RiskVector,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSection {
    pub id: String,
    pub title: String,
    /// AsciiDoc-lite source.
    pub content: String,
}

impl DocSection {
    pub fn is_disclaimer(&self) -> bool {
        self.id == DISCLAIMER_SECTION_ID
    }

    /// Title as displayed; the disclaimer gets a warning sign.
    pub fn display_title(&self) -> String {
        if self.is_disclaimer() {
            format!("\u{26A0}\u{FE0F} {}", self.title)
        } else {
            self.title.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    pub title: String,
    #[serde(default)]
    pub footer_note: String,
    pub sections: Vec<DocSection>,
}

/// Shape of a bundle file before validation.
#[derive(Debug, Clone, Deserialize)]
struct BundleRepr {
    locale: Locale,
    strings: UiStrings,
    kind_badges: KindBadges,
    footer: FooterStrings,
    dimensions: Vec<DimensionDescriptor>,
    tiers: Vec<TierDescriptor>,
    presets: Vec<Preset>,
    mitigations: Vec<MitigationGroup>,
    docs: Documentation,
}

/// All localized content for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BundleRepr")]
pub struct ContentBundle {
    locale: Locale,
    strings: UiStrings,
    kind_badges: KindBadges,
    footer: FooterStrings,
    dimensions: Vec<DimensionDescriptor>,
    tiers: Vec<TierDescriptor>,
    presets: Vec<Preset>,
    mitigations: Vec<MitigationGroup>,
    docs: Documentation,
}

impl TryFrom<BundleRepr> for ContentBundle {
    type Error = ContentError;

    fn try_from(repr: BundleRepr) -> Result<Self, Self::Error> {
        let bundle = Self {
            locale: repr.locale,
            strings: repr.strings,
            kind_badges: repr.kind_badges,
            footer: repr.footer,
            dimensions: repr.dimensions,
            tiers: repr.tiers,
            presets: repr.presets,
            mitigations: repr.mitigations,
            docs: repr.docs,
        };
        bundle.validate()?;
        Ok(bundle)
    }
}

impl ContentBundle {
    /// Parse and validate a bundle. `source_name` only labels errors.
    pub fn from_toml(expected: Locale, source_name: &str, text: &str) -> Result<Self, ContentError> {
        let repr: BundleRepr = toml::from_str(text).map_err(|e| ContentError::ParseError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
        if repr.locale != expected {
            return Err(ContentError::Invalid {
                locale: expected.code().to_string(),
                field: "locale".to_string(),
                message: format!("{source_name} declares locale '{}'", repr.locale),
            });
        }
        Self::try_from(repr)
    }

    /// Structural checks every consumer relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.dimensions.len() != DIMENSION_COUNT {
            return Err(self.invalid(
                "dimensions",
                format!("expected {DIMENSION_COUNT}, found {}", self.dimensions.len()),
            ));
        }
        for (expected, descriptor) in Dimension::ALL.iter().zip(&self.dimensions) {
            if descriptor.key != *expected {
                return Err(self.invalid(
                    "dimensions",
                    format!("expected '{}' at position {}, found '{}'", expected, expected.index(), descriptor.key),
                ));
            }
            if descriptor.levels.len() != LEVEL_COUNT {
                return Err(self.invalid(
                    &format!("dimensions.{}.levels", descriptor.key),
                    format!("expected {LEVEL_COUNT}, found {}", descriptor.levels.len()),
                ));
            }
            if descriptor.label.trim().is_empty() || descriptor.short_label.trim().is_empty() {
                return Err(self.invalid(
                    &format!("dimensions.{}", descriptor.key),
                    "label and short_label must not be empty".to_string(),
                ));
            }
        }

        if self.tiers.len() != TIER_COUNT {
            return Err(self.invalid(
                "tiers",
                format!("expected {TIER_COUNT}, found {}", self.tiers.len()),
            ));
        }

        if self.mitigations.len() != TIER_COUNT {
            return Err(self.invalid(
                "mitigations",
                format!("expected {TIER_COUNT} groups, found {}", self.mitigations.len()),
            ));
        }
        for (i, group) in self.mitigations.iter().enumerate() {
            if usize::from(group.tier) != i + 1 {
                return Err(self.invalid(
                    "mitigations",
                    format!("group {} is numbered {}", i + 1, group.tier),
                ));
            }
            if group.measures.is_empty() {
                return Err(self.invalid(
                    &format!("mitigations.{}", group.tier),
                    "group has no measures".to_string(),
                ));
            }
        }

        let mut slugs = BTreeSet::new();
        for preset in &self.presets {
            if preset.slug.trim().is_empty() {
                return Err(self.invalid("presets", format!("preset '{}' has no slug", preset.name)));
            }
            if !slugs.insert(preset.slug.as_str()) {
                return Err(self.invalid("presets", format!("duplicate slug '{}'", preset.slug)));
            }
        }

        let mut ids = BTreeSet::new();
        for section in &self.docs.sections {
            if !ids.insert(section.id.as_str()) {
                return Err(self.invalid("docs.sections", format!("duplicate id '{}'", section.id)));
            }
        }

        if !self.strings.cumulative_note_first.contains("{title}")
            || !self.strings.cumulative_note.contains("{title}")
        {
            return Err(self.invalid(
                "strings.cumulative_note",
                "templates must contain {title}".to_string(),
            ));
        }
        Ok(())
    }

    fn invalid(&self, field: &str, message: String) -> ContentError {
        ContentError::Invalid {
            locale: self.locale.code().to_string(),
            field: field.to_string(),
            message,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn strings(&self) -> &UiStrings {
        &self.strings
    }

    pub fn kind_badges(&self) -> &KindBadges {
        &self.kind_badges
    }

    pub fn footer(&self) -> &FooterStrings {
        &self.footer
    }

    /// Descriptors in canonical dimension order.
    pub fn dimensions(&self) -> &[DimensionDescriptor] {
        &self.dimensions
    }

    pub fn dimension(&self, dimension: Dimension) -> &DimensionDescriptor {
        &self.dimensions[dimension.index()]
    }

    /// Short axis labels for the chart, in canonical order.
    pub fn short_labels(&self) -> Vec<&str> {
        self.dimensions.iter().map(|d| d.short_label.as_str()).collect()
    }

    pub fn tiers(&self) -> &[TierDescriptor] {
        &self.tiers
    }

    pub fn tier(&self, tier: TierIndex) -> &TierDescriptor {
        &self.tiers[tier.index()]
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn preset(&self, slug: &str) -> Result<&Preset, ContentError> {
        self.presets
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ContentError::UnknownPreset {
                slug: slug.to_string(),
            })
    }

    /// The preset whose levels equal `vector`, if any.
    pub fn preset_matching(&self, vector: &RiskVector) -> Option<&Preset> {
        self.presets.iter().find(|p| p.values == *vector)
    }

    /// Mitigation groups ordered by tier number.
    pub fn mitigations(&self) -> &[MitigationGroup] {
        &self.mitigations
    }

    /// The group a tier adds on top of the lower tiers.
    pub fn mitigation_group(&self, tier: TierIndex) -> &MitigationGroup {
        &self.mitigations[tier.index()]
    }

    pub fn docs(&self) -> &Documentation {
        &self.docs
    }

    /// Explains the cumulative unlock for `tier`, naming `group_title`.
    ///
    /// Tier 1 uses the single-tier template. Higher tiers name the lower
    /// tiers as "Tier 1" (tier 2) or a range "Tier 1–N" (tier 3 and up).
    pub fn cumulative_note(&self, tier: TierIndex, group_title: &str) -> String {
        let index = tier.index();
        if index == 0 {
            return self.strings.cumulative_note_first.replace("{title}", group_title);
        }
        let range = if index > 1 {
            format!("\u{2013}{index}")
        } else {
            String::new()
        };
        self.strings
            .cumulative_note
            .replace("{tier}", &tier.number().to_string())
            .replace("{range}", &range)
            .replace("{title}", group_title)
    }

    /// Cumulative note for `tier`, naming that tier's own group.
    pub fn cumulative_note_for(&self, tier: TierIndex) -> String {
        self.cumulative_note(tier, &self.mitigation_group(tier).title)
    }

    /// `"1 measure"`, `"5 measures"`.
    pub fn measure_count_label(&self, count: usize) -> String {
        let noun = if count == 1 {
            &self.strings.measure
        } else {
            &self.strings.measures
        };
        format!("{count} {noun}")
    }
}
