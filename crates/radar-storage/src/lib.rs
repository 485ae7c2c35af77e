//! # radar-storage
//!
//! Persistence for the two display preferences (language, theme).
//! SQLite is the default backend; an in-memory store serves tests and
//! ephemeral runs. [`Preferences`] is the application state built on top
//! of either.

pub mod backend;
pub mod connection;
pub mod memory_store;
pub mod migrations;
pub mod preferences;
pub mod sqlite_store;

pub use backend::open_store;
pub use memory_store::MemoryPreferenceStore;
pub use preferences::{system_locale, system_theme, PreferenceSnapshot, Preferences};
pub use sqlite_store::SqlitePreferenceStore;
