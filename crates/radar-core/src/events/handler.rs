//! RadarEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling Risk Radar events.
///
/// Handlers only override the events they care about.
pub trait RadarEventHandler: Send + Sync {
    // ---- Assessment ----
    fn on_assessment_computed(&self, _event: &AssessmentComputedEvent) {}
    fn on_level_changed(&self, _event: &LevelChangedEvent) {}
    fn on_preset_applied(&self, _event: &PresetAppliedEvent) {}

    // ---- Preferences ----
    fn on_locale_changed(&self, _event: &LocaleChangedEvent) {}
    fn on_theme_changed(&self, _event: &ThemeChangedEvent) {}
    fn on_preference_persisted(&self, _event: &PreferencePersistedEvent) {}

    // ---- Presentation ----
    fn on_docs_toggled(&self, _event: &DocsToggledEvent) {}
    fn on_content_fallback(&self, _event: &ContentFallbackEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
