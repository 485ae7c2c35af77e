//! Preference initialization, setters, toggles, and reset.

use std::sync::Arc;

use radar_core::errors::StorageError;
use radar_core::traits::{PreferenceStore, SystemEnvironment};
use radar_core::{Locale, Theme};
use radar_storage::{MemoryPreferenceStore, Preferences};

struct FakeEnv {
    language: Option<&'static str>,
    dark: Option<bool>,
}

impl SystemEnvironment for FakeEnv {
    fn language_tag(&self) -> Option<String> {
        self.language.map(str::to_string)
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.dark
    }
}

const GERMAN_DARK: FakeEnv = FakeEnv {
    language: Some("de_DE.UTF-8"),
    dark: Some(true),
};

const SILENT: FakeEnv = FakeEnv {
    language: None,
    dark: None,
};

/// Store whose every operation fails.
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::SqliteError {
            message: "disk I/O error".to_string(),
        })
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::SqliteError {
            message: "readonly database".to_string(),
        })
    }
    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::LockPoisoned)
    }
}

/// Memory store that refuses to remove one key.
struct StickyKeyStore {
    inner: MemoryPreferenceStore,
    sticky: &'static str,
}

impl PreferenceStore for StickyKeyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if key == self.sticky {
            return Err(StorageError::SqliteError {
                message: "database is locked".to_string(),
            });
        }
        self.inner.remove(key)
    }
}

#[test]
fn empty_store_uses_system_defaults() {
    let prefs = Preferences::initialize(Arc::new(MemoryPreferenceStore::new()), &GERMAN_DARK);
    assert_eq!(prefs.locale(), Locale::De);
    assert_eq!(prefs.theme(), Theme::Dark);
    assert!(!prefs.is_locale_explicit());
    assert!(!prefs.is_theme_explicit());
}

#[test]
fn no_system_preference_means_english_and_light() {
    let prefs = Preferences::initialize(Arc::new(MemoryPreferenceStore::new()), &SILENT);
    assert_eq!(prefs.locale(), Locale::En);
    assert_eq!(prefs.theme(), Theme::Light);
}

#[test]
fn stored_values_win_over_system() {
    let store = MemoryPreferenceStore::with_entries([("language", "en"), ("theme", "light")]);
    let prefs = Preferences::initialize(Arc::new(store), &GERMAN_DARK);
    assert_eq!(prefs.locale(), Locale::En);
    assert_eq!(prefs.theme(), Theme::Light);
    assert!(prefs.is_locale_explicit());
    assert!(prefs.is_theme_explicit());
}

#[test]
fn unrecognized_stored_values_fall_back() {
    let store = MemoryPreferenceStore::with_entries([("language", "fr"), ("theme", "sepia")]);
    let prefs = Preferences::initialize(Arc::new(store), &GERMAN_DARK);
    assert_eq!(prefs.locale(), Locale::De);
    assert_eq!(prefs.theme(), Theme::Dark);
    assert!(!prefs.is_locale_explicit());
}

#[test]
fn unreadable_store_falls_back_to_system() {
    let prefs = Preferences::initialize(Arc::new(BrokenStore), &GERMAN_DARK);
    assert_eq!(prefs.locale(), Locale::De);
    assert_eq!(prefs.theme(), Theme::Dark);
}

#[test]
fn setters_write_through() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut prefs = Preferences::initialize(store.clone(), &SILENT);
    assert!(store.is_empty(), "detected values are never persisted");

    assert_eq!(prefs.set_locale(Locale::De).unwrap(), Locale::En);
    assert_eq!(prefs.set_theme(Theme::Dark).unwrap(), Theme::Light);
    assert_eq!(store.get("language").unwrap().as_deref(), Some("de"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert!(prefs.is_locale_explicit());

    let reloaded = Preferences::initialize(store, &SILENT);
    assert_eq!(reloaded.snapshot(), prefs.snapshot());
}

#[test]
fn toggles_alternate() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut prefs = Preferences::initialize(store.clone(), &SILENT);
    assert_eq!(prefs.toggle_locale().unwrap(), Locale::De);
    assert_eq!(prefs.toggle_locale().unwrap(), Locale::En);
    assert_eq!(prefs.toggle_theme().unwrap(), Theme::Dark);
    assert_eq!(prefs.toggle_theme().unwrap(), Theme::Light);
    assert_eq!(store.get("language").unwrap().as_deref(), Some("en"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn failed_write_leaves_state_unchanged() {
    let mut prefs = Preferences::initialize(Arc::new(BrokenStore), &SILENT);
    assert!(prefs.set_locale(Locale::De).is_err());
    assert_eq!(prefs.locale(), Locale::En);
    assert!(!prefs.is_locale_explicit());
    assert!(prefs.toggle_theme().is_err());
    assert_eq!(prefs.theme(), Theme::Light);
}

#[test]
fn reset_forgets_explicit_choices() {
    let store = Arc::new(MemoryPreferenceStore::with_entries([
        ("language", "en"),
        ("theme", "light"),
    ]));
    let mut prefs = Preferences::initialize(store.clone(), &GERMAN_DARK);
    prefs.reset(&GERMAN_DARK).unwrap();
    assert!(store.is_empty());
    assert_eq!(prefs.locale(), Locale::De);
    assert_eq!(prefs.theme(), Theme::Dark);
    assert!(!prefs.is_theme_explicit());
}

#[test]
fn partial_reset_keeps_memory_in_step_with_store() {
    let store = Arc::new(StickyKeyStore {
        inner: MemoryPreferenceStore::new(),
        sticky: "theme",
    });
    let mut prefs = Preferences::initialize(store.clone(), &SILENT);
    prefs.set_locale(Locale::De).unwrap();
    prefs.set_theme(Theme::Dark).unwrap();

    assert!(prefs.reset(&SILENT).is_err());

    // language was removed, so memory follows the system again
    assert_eq!(store.get("language").unwrap(), None);
    assert_eq!(prefs.locale(), Locale::En);
    assert!(!prefs.is_locale_explicit());
    // theme is still saved and still explicit
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(prefs.theme(), Theme::Dark);
    assert!(prefs.is_theme_explicit());

    let restarted = Preferences::initialize(store, &SILENT);
    assert_eq!(restarted.snapshot(), prefs.snapshot());
}

#[test]
fn snapshot_serializes_with_codes() {
    let prefs = Preferences::initialize(Arc::new(MemoryPreferenceStore::new()), &GERMAN_DARK);
    let json = serde_json::to_value(prefs.snapshot()).unwrap();
    assert_eq!(json["locale"], "de");
    assert_eq!(json["theme"], "dark");
    assert_eq!(json["locale_explicit"], false);
}
