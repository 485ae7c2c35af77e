//! EventDispatcher: synchronous event dispatch, zero overhead when empty.

use std::sync::Arc;

use super::handler::RadarEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn RadarEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn RadarEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not stop later handlers from receiving it.
    fn emit<F: Fn(&dyn RadarEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    // ---- Assessment ----
    pub fn emit_assessment_computed(&self, event: &AssessmentComputedEvent) {
        self.emit(|h| h.on_assessment_computed(event));
    }

    pub fn emit_level_changed(&self, event: &LevelChangedEvent) {
        self.emit(|h| h.on_level_changed(event));
    }

    pub fn emit_preset_applied(&self, event: &PresetAppliedEvent) {
        self.emit(|h| h.on_preset_applied(event));
    }

    // ---- Preferences ----
    pub fn emit_locale_changed(&self, event: &LocaleChangedEvent) {
        self.emit(|h| h.on_locale_changed(event));
    }

    pub fn emit_theme_changed(&self, event: &ThemeChangedEvent) {
        self.emit(|h| h.on_theme_changed(event));
    }

    pub fn emit_preference_persisted(&self, event: &PreferencePersistedEvent) {
        self.emit(|h| h.on_preference_persisted(event));
    }

    // ---- Presentation ----
    pub fn emit_docs_toggled(&self, event: &DocsToggledEvent) {
        self.emit(|h| h.on_docs_toggled(event));
    }

    pub fn emit_content_fallback(&self, event: &ContentFallbackEvent) {
        self.emit(|h| h.on_content_fallback(event));
    }

    // ---- Errors ----
    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
