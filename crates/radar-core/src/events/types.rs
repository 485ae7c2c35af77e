//! Event payload types.

use crate::types::{Dimension, Level, Locale, RiskVector, Theme, TierIndex};

/// Payload for `on_assessment_computed`.
#[derive(Debug, Clone)]
pub struct AssessmentComputedEvent {
    pub vector: RiskVector,
    pub tier: TierIndex,
}

/// Payload for `on_level_changed`.
#[derive(Debug, Clone)]
pub struct LevelChangedEvent {
    pub dimension: Dimension,
    pub previous: Level,
    pub current: Level,
}

/// Payload for `on_preset_applied`.
#[derive(Debug, Clone)]
pub struct PresetAppliedEvent {
    pub slug: String,
    pub vector: RiskVector,
}

/// Payload for `on_locale_changed`.
#[derive(Debug, Clone)]
pub struct LocaleChangedEvent {
    pub previous: Locale,
    pub current: Locale,
}

/// Payload for `on_theme_changed`.
#[derive(Debug, Clone)]
pub struct ThemeChangedEvent {
    pub previous: Theme,
    pub current: Theme,
}

/// Payload for `on_docs_toggled`.
#[derive(Debug, Clone)]
pub struct DocsToggledEvent {
    pub open: bool,
}

/// Payload for `on_content_fallback`.
#[derive(Debug, Clone)]
pub struct ContentFallbackEvent {
    pub requested: Locale,
    pub fallback: Locale,
    pub reason: String,
}

/// Payload for `on_preference_persisted`.
#[derive(Debug, Clone)]
pub struct PreferencePersistedEvent {
    pub key: String,
    pub value: String,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
