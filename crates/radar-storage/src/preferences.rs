//! Display preferences as explicit application state.
//!
//! On startup each value comes from the store if a recognized value was
//! saved there, otherwise from the system environment. Only explicit
//! changes are written back; a system-derived value is never persisted.

use std::sync::Arc;

use serde::Serialize;

use radar_core::constants::{PREF_LANGUAGE, PREF_THEME};
use radar_core::errors::StorageError;
use radar_core::traits::{PreferenceStore, SystemEnvironment};
use radar_core::{Locale, Theme};

/// Plain view of the current preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreferenceSnapshot {
    pub locale: Locale,
    pub theme: Theme,
    /// Whether the locale was chosen by the user rather than detected.
    pub locale_explicit: bool,
    pub theme_explicit: bool,
}

pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
    locale: Locale,
    theme: Theme,
    locale_explicit: bool,
    theme_explicit: bool,
}

impl Preferences {
    /// Read stored values, falling back to the system for anything absent,
    /// unrecognized, or unreadable.
    pub fn initialize(store: Arc<dyn PreferenceStore>, env: &dyn SystemEnvironment) -> Self {
        let stored_locale = read_stored(store.as_ref(), PREF_LANGUAGE, Locale::from_code);
        let stored_theme = read_stored(store.as_ref(), PREF_THEME, Theme::from_code);

        let prefs = Self {
            locale: stored_locale.unwrap_or_else(|| system_locale(env)),
            theme: stored_theme.unwrap_or_else(|| system_theme(env)),
            locale_explicit: stored_locale.is_some(),
            theme_explicit: stored_theme.is_some(),
            store,
        };
        tracing::debug!(
            locale = %prefs.locale,
            theme = %prefs.theme,
            locale_explicit = prefs.locale_explicit,
            theme_explicit = prefs.theme_explicit,
            "preferences initialized"
        );
        prefs
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_locale_explicit(&self) -> bool {
        self.locale_explicit
    }

    pub fn is_theme_explicit(&self) -> bool {
        self.theme_explicit
    }

    pub fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            locale: self.locale,
            theme: self.theme,
            locale_explicit: self.locale_explicit,
            theme_explicit: self.theme_explicit,
        }
    }

    /// Persist and apply `locale`. Returns the previous locale. State is
    /// left unchanged when the write fails.
    pub fn set_locale(&mut self, locale: Locale) -> Result<Locale, StorageError> {
        self.store.set(PREF_LANGUAGE, locale.code())?;
        let previous = std::mem::replace(&mut self.locale, locale);
        self.locale_explicit = true;
        Ok(previous)
    }

    /// Persist and apply `theme`. Returns the previous theme.
    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme, StorageError> {
        self.store.set(PREF_THEME, theme.code())?;
        let previous = std::mem::replace(&mut self.theme, theme);
        self.theme_explicit = true;
        Ok(previous)
    }

    /// Switch to the other language. Returns the new locale.
    pub fn toggle_locale(&mut self) -> Result<Locale, StorageError> {
        let next = self.locale.toggled();
        self.set_locale(next)?;
        Ok(next)
    }

    /// Switch to the other theme. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Forget both explicit choices and return to the system defaults.
    ///
    /// Each value is reset as soon as its key is removed, so a failure on
    /// the second key leaves memory matching the store.
    pub fn reset(&mut self, env: &dyn SystemEnvironment) -> Result<(), StorageError> {
        self.store.remove(PREF_LANGUAGE)?;
        self.locale = system_locale(env);
        self.locale_explicit = false;

        self.store.remove(PREF_THEME)?;
        self.theme = system_theme(env);
        self.theme_explicit = false;
        Ok(())
    }
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("locale", &self.locale)
            .field("theme", &self.theme)
            .field("locale_explicit", &self.locale_explicit)
            .field("theme_explicit", &self.theme_explicit)
            .finish_non_exhaustive()
    }
}

fn read_stored<T>(
    store: &dyn PreferenceStore,
    key: &str,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    match store.get(key) {
        Ok(Some(raw)) => {
            let parsed = parse(&raw);
            if parsed.is_none() {
                tracing::warn!(key, value = %raw, "ignoring unrecognized stored preference");
            }
            parsed
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(key, error = %e, "cannot read stored preference, using system default");
            None
        }
    }
}

/// Locale the system asks for, or the default when it says nothing usable.
pub fn system_locale(env: &dyn SystemEnvironment) -> Locale {
    env.language_tag()
        .map(|tag| Locale::from_language_tag(&tag))
        .unwrap_or_default()
}

pub fn system_theme(env: &dyn SystemEnvironment) -> Theme {
    match env.prefers_dark() {
        Some(true) => Theme::Dark,
        _ => Theme::Light,
    }
}
