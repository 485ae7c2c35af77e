//! RadarSession: the state one run works on.
//!
//! Owns the current risk vector, the preferences, and the documentation
//! flag. Every mutation recomputes the assessment and chart geometry
//! synchronously and reports what changed through the dispatcher.

use radar_content::ContentBundle;
use radar_core::errors::{ContentError, RadarErrorCode, StorageError};
use radar_core::events::types::*;
use radar_core::{Dimension, Level, Locale, RiskVector, Theme};
use radar_engine::{Assessment, RadarGeometry};
use radar_render::{ChartOptions, RadarView};
use radar_storage::{system_locale, PreferenceSnapshot, Preferences};

use crate::error::CliError;
use crate::runtime::RadarRuntime;

pub struct RadarSession<'r> {
    runtime: &'r RadarRuntime,
    preferences: Preferences,
    vector: RiskVector,
    docs_open: bool,
    chart: ChartOptions,
    /// Run-only overrides; never persisted.
    locale_override: Option<Locale>,
    theme_override: Option<Theme>,
    content: &'r ContentBundle,
    assessment: Assessment,
    geometry: RadarGeometry,
}

impl<'r> RadarSession<'r> {
    pub fn new(runtime: &'r RadarRuntime) -> Result<Self, CliError> {
        let preferences = Preferences::initialize(runtime.store.clone(), runtime.env.as_ref());
        let chart = ChartOptions::from_config(&runtime.config.chart);
        let vector = RiskVector::initial();
        let content = resolve_content(runtime, preferences.locale())?;
        let assessment = Assessment::evaluate(&vector);
        let geometry = RadarView::new(&assessment, content)
            .with_chart(chart)
            .geometry()?;
        Ok(Self {
            runtime,
            preferences,
            vector,
            docs_open: false,
            chart,
            locale_override: None,
            theme_override: None,
            content,
            assessment,
            geometry,
        })
    }

    pub fn vector(&self) -> &RiskVector {
        &self.vector
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn geometry(&self) -> &RadarGeometry {
        &self.geometry
    }

    pub fn content(&self) -> &'r ContentBundle {
        self.content
    }

    pub fn docs_open(&self) -> bool {
        self.docs_open
    }

    pub fn preferences(&self) -> PreferenceSnapshot {
        self.preferences.snapshot()
    }

    /// Language in effect: the run override, else the preference.
    pub fn locale(&self) -> Locale {
        self.locale_override.unwrap_or(self.preferences.locale())
    }

    pub fn theme(&self) -> Theme {
        self.theme_override.unwrap_or(self.preferences.theme())
    }

    /// Everything a reporter needs for the current state.
    pub fn view(&self) -> RadarView<'_> {
        RadarView::new(&self.assessment, self.content)
            .with_theme(self.theme())
            .with_chart(self.chart)
            .with_docs_open(self.docs_open)
    }

    // ---- Risk vector ----

    pub fn set_level(&mut self, dimension: Dimension, level: Level) -> Result<(), CliError> {
        let previous = self.vector.get(dimension);
        if previous == level {
            return Ok(());
        }
        self.runtime.dispatcher.emit_level_changed(&LevelChangedEvent {
            dimension,
            previous,
            current: level,
        });
        self.vector = self.vector.with_level(dimension, level);
        self.recompute()
    }

    pub fn set_vector(&mut self, vector: RiskVector) -> Result<(), CliError> {
        self.vector = vector;
        self.recompute()
    }

    /// Replace the vector with a preset from the current content.
    pub fn apply_preset(&mut self, slug: &str) -> Result<(), CliError> {
        let preset = self.content.preset(slug)?;
        self.runtime.dispatcher.emit_preset_applied(&PresetAppliedEvent {
            slug: preset.slug.clone(),
            vector: preset.values,
        });
        self.set_vector(preset.values)
    }

    // ---- Panels ----

    pub fn set_docs_open(&mut self, open: bool) {
        if self.docs_open != open {
            self.toggle_docs();
        }
    }

    pub fn toggle_docs(&mut self) -> bool {
        self.docs_open = !self.docs_open;
        self.runtime
            .dispatcher
            .emit_docs_toggled(&DocsToggledEvent { open: self.docs_open });
        self.docs_open
    }

    // ---- Preferences ----

    /// Use `locale` for this run without saving it.
    pub fn override_locale(&mut self, locale: Locale) -> Result<(), CliError> {
        let previous = self.locale();
        let content = self.content_for(locale)?;
        self.locale_override = Some(locale);
        self.locale_changed(previous, content)
    }

    /// Use `theme` for this run without saving it.
    pub fn override_theme(&mut self, theme: Theme) {
        let previous = self.theme();
        self.theme_override = Some(theme);
        self.theme_changed(previous);
    }

    pub fn set_locale(&mut self, locale: Locale) -> Result<(), CliError> {
        let previous = self.locale();
        let content = self.content_for(locale)?;
        let result = self.preferences.set_locale(locale);
        self.persisted(result, "language", locale.code())?;
        self.locale_override = None;
        self.locale_changed(previous, content)
    }

    pub fn toggle_locale(&mut self) -> Result<Locale, CliError> {
        let next = self.locale().toggled();
        self.set_locale(next)?;
        Ok(next)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), CliError> {
        let previous = self.theme();
        let result = self.preferences.set_theme(theme);
        self.persisted(result, "theme", theme.code())?;
        self.theme_override = None;
        self.theme_changed(previous);
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, CliError> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Drop saved and run-only choices and follow the system again.
    ///
    /// When only part of the saved state could be removed, the session
    /// still follows whatever was reset before the error is returned.
    pub fn reset_preferences(&mut self) -> Result<(), CliError> {
        let previous_locale = self.locale();
        let previous_theme = self.theme();
        let content = self.content_for(system_locale(self.runtime.env.as_ref()))?;
        let result = self.preferences.reset(self.runtime.env.as_ref());
        if result.is_ok() {
            self.locale_override = None;
            self.theme_override = None;
        }
        self.theme_changed(previous_theme);
        self.locale_changed(previous_locale, content)?;
        result.map_err(|e| {
            self.report_error(&e);
            e.into()
        })
    }

    // ---- Internals ----

    fn persisted<T>(
        &self,
        result: Result<T, StorageError>,
        key: &str,
        value: &str,
    ) -> Result<(), CliError> {
        match result {
            Ok(_) => {
                self.runtime
                    .dispatcher
                    .emit_preference_persisted(&PreferencePersistedEvent {
                        key: key.to_string(),
                        value: value.to_string(),
                    });
                Ok(())
            }
            Err(e) => {
                self.report_error(&e);
                Err(e.into())
            }
        }
    }

    fn report_error(&self, e: &StorageError) {
        self.runtime.dispatcher.emit_error(&ErrorEvent {
            message: e.to_string(),
            error_code: e.error_code().to_string(),
        });
    }

    /// Content for `locale`, reusing the current bundle when nothing changes.
    fn content_for(&self, locale: Locale) -> Result<&'r ContentBundle, CliError> {
        if locale == self.locale() {
            return Ok(self.content);
        }
        Ok(resolve_content(self.runtime, locale)?)
    }

    /// Install `content`, already resolved for the locale now in effect.
    fn locale_changed(
        &mut self,
        previous: Locale,
        content: &'r ContentBundle,
    ) -> Result<(), CliError> {
        let current = self.locale();
        if current == previous {
            return Ok(());
        }
        self.content = content;
        self.runtime
            .dispatcher
            .emit_locale_changed(&LocaleChangedEvent { previous, current });
        self.recompute()
    }

    fn theme_changed(&self, previous: Theme) {
        let current = self.theme();
        if current != previous {
            self.runtime
                .dispatcher
                .emit_theme_changed(&ThemeChangedEvent { previous, current });
        }
    }

    fn recompute(&mut self) -> Result<(), CliError> {
        self.assessment = Assessment::evaluate(&self.vector);
        self.geometry = RadarView::new(&self.assessment, self.content)
            .with_chart(self.chart)
            .geometry()?;
        self.runtime
            .dispatcher
            .emit_assessment_computed(&AssessmentComputedEvent {
                vector: self.vector,
                tier: self.assessment.tier,
            });
        Ok(())
    }
}

/// Content for `locale`, announcing a fallback when one is used.
fn resolve_content(runtime: &RadarRuntime, locale: Locale) -> Result<&ContentBundle, ContentError> {
    let resolved = runtime.registry.resolve(locale)?;
    if let Some(reason) = resolved.fallback_reason {
        runtime
            .dispatcher
            .emit_content_fallback(&ContentFallbackEvent {
                requested: locale,
                fallback: resolved.bundle.locale(),
                reason: reason.to_string(),
            });
    }
    Ok(resolved.bundle)
}
