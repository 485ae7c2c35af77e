//! RadarRuntime: resolved config, content registry, preference store, and
//! event dispatcher for one CLI invocation.

use std::path::PathBuf;
use std::sync::Arc;

use radar_content::ContentRegistry;
use radar_core::config::{CliOverrides, RadarConfig};
use radar_core::events::types::*;
use radar_core::events::{EventDispatcher, RadarEventHandler};
use radar_core::traits::{PreferenceStore, ProcessEnvironment, SystemEnvironment};
use radar_storage::open_store;

use crate::error::CliError;

/// Options for building the runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// Directory searched for `radar.toml`. Defaults to the working directory.
    pub root: Option<PathBuf>,
    pub overrides: CliOverrides,
}

/// The subsystems a command works with.
pub struct RadarRuntime {
    pub config: RadarConfig,
    pub registry: ContentRegistry,
    pub store: Arc<dyn PreferenceStore>,
    pub dispatcher: EventDispatcher,
    pub env: Box<dyn SystemEnvironment>,
}

impl RadarRuntime {
    pub fn new(opts: RuntimeOptions) -> Result<Self, CliError> {
        let root = opts.root.unwrap_or_else(|| PathBuf::from("."));
        let config = RadarConfig::load(&root, Some(&opts.overrides))?;
        let registry = ContentRegistry::load(&config.content)?;
        let store = open_store(&config.storage)?;
        Ok(Self::from_parts(
            config,
            registry,
            store,
            Box::new(ProcessEnvironment),
        ))
    }

    /// Assemble a runtime from already-built parts. A logging handler is
    /// always registered.
    pub fn from_parts(
        config: RadarConfig,
        registry: ContentRegistry,
        store: Arc<dyn PreferenceStore>,
        env: Box<dyn SystemEnvironment>,
    ) -> Self {
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(Arc::new(LoggingEventHandler));
        Self {
            config,
            registry,
            store,
            dispatcher,
            env,
        }
    }
}

/// Writes every event to the log.
struct LoggingEventHandler;

impl RadarEventHandler for LoggingEventHandler {
    fn on_assessment_computed(&self, event: &AssessmentComputedEvent) {
        tracing::debug!(tier = event.tier.number(), vector = ?event.vector.to_map(), "assessment computed");
    }

    fn on_level_changed(&self, event: &LevelChangedEvent) {
        tracing::debug!(
            dimension = %event.dimension,
            previous = event.previous.value(),
            current = event.current.value(),
            "level changed"
        );
    }

    fn on_preset_applied(&self, event: &PresetAppliedEvent) {
        tracing::info!(preset = %event.slug, "preset applied");
    }

    fn on_locale_changed(&self, event: &LocaleChangedEvent) {
        tracing::info!(previous = %event.previous, current = %event.current, "language changed");
    }

    fn on_theme_changed(&self, event: &ThemeChangedEvent) {
        tracing::info!(previous = %event.previous, current = %event.current, "theme changed");
    }

    fn on_preference_persisted(&self, event: &PreferencePersistedEvent) {
        tracing::debug!(key = %event.key, value = %event.value, "preference saved");
    }

    fn on_docs_toggled(&self, event: &DocsToggledEvent) {
        tracing::debug!(open = event.open, "documentation panel toggled");
    }

    fn on_content_fallback(&self, event: &ContentFallbackEvent) {
        tracing::warn!(
            requested = %event.requested,
            fallback = %event.fallback,
            reason = %event.reason,
            "showing fallback language"
        );
    }

    fn on_error(&self, event: &ErrorEvent) {
        tracing::error!(code = %event.error_code, "{}", event.message);
    }
}
