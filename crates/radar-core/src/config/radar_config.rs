//! Top-level Risk Radar configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ChartConfig, ContentConfig, ReportConfig, StorageConfig};
use crate::constants::{
    CONFIG_FILE_NAME, MAX_CHART_SIZE, MIN_CHART_SIZE, REPORT_FORMATS, STORAGE_BACKENDS,
    USER_DIR_NAME,
};
use crate::errors::ConfigError;
use crate::types::Locale;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`RADAR_*`)
/// 3. Project config (`radar.toml` in the working directory)
/// 4. User config (`~/.risk-radar/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RadarConfig {
    pub chart: ChartConfig,
    pub content: ContentConfig,
    pub storage: StorageConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub chart_size: Option<u32>,
    pub report_format: Option<String>,
    pub report_color: Option<bool>,
    pub storage_path: Option<String>,
    pub storage_backend: Option<String>,
    pub content_dir: Option<String>,
}

impl RadarConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // An unreadable user config is not fatal.
                        tracing::warn!(error = %e, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RadarConfig) -> Result<(), ConfigError> {
        if let Some(size) = config.chart.size {
            if !(MIN_CHART_SIZE..=MAX_CHART_SIZE).contains(&size) {
                return Err(ConfigError::ValidationFailed {
                    field: "chart.size".to_string(),
                    message: format!("must be between {MIN_CHART_SIZE} and {MAX_CHART_SIZE}"),
                });
            }
        }
        let margin = config.chart.effective_margin();
        if !margin.is_finite() || margin < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "chart.margin".to_string(),
                message: "must be a finite, non-negative number".to_string(),
            });
        }
        if margin * 2.0 >= f64::from(config.chart.effective_size()) {
            return Err(ConfigError::ValidationFailed {
                field: "chart.margin".to_string(),
                message: "must be less than half the chart size".to_string(),
            });
        }
        let offset = config.chart.effective_label_offset();
        if !offset.is_finite() || offset < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "chart.label_offset".to_string(),
                message: "must be a finite, non-negative number".to_string(),
            });
        }
        if let Some(ref format) = config.report.format {
            if !REPORT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "report.format".to_string(),
                    message: format!("'{format}' is not one of {}", REPORT_FORMATS.join(", ")),
                });
            }
        }
        if let Some(ref backend) = config.storage.backend {
            if !STORAGE_BACKENDS.contains(&backend.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "storage.backend".to_string(),
                    message: format!("'{backend}' is not one of {}", STORAGE_BACKENDS.join(", ")),
                });
            }
        }
        if let Some(ref locale) = config.content.fallback_locale {
            if Locale::from_code(locale).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: "content.fallback_locale".to_string(),
                    message: format!("'{locale}' is not a supported locale"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.risk-radar/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        user_dir().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut RadarConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RadarConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a `Some` value.
    fn merge(base: &mut RadarConfig, other: &RadarConfig) {
        // Chart
        if other.chart.size.is_some() {
            base.chart.size = other.chart.size;
        }
        if other.chart.margin.is_some() {
            base.chart.margin = other.chart.margin;
        }
        if other.chart.label_offset.is_some() {
            base.chart.label_offset = other.chart.label_offset;
        }
        if other.chart.show_labels.is_some() {
            base.chart.show_labels = other.chart.show_labels;
        }

        // Content
        if other.content.dir.is_some() {
            base.content.dir = other.content.dir.clone();
        }
        if other.content.fallback_locale.is_some() {
            base.content.fallback_locale = other.content.fallback_locale.clone();
        }

        // Storage
        if other.storage.path.is_some() {
            base.storage.path = other.storage.path.clone();
        }
        if other.storage.backend.is_some() {
            base.storage.backend = other.storage.backend.clone();
        }

        // Report
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.color.is_some() {
            base.report.color = other.report.color;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RADAR_CHART_SIZE`, `RADAR_STORAGE_PATH`, etc.
    fn apply_env_overrides(config: &mut RadarConfig) {
        if let Ok(val) = std::env::var("RADAR_CHART_SIZE") {
            if let Ok(v) = val.parse::<u32>() {
                config.chart.size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RADAR_CONTENT_DIR") {
            config.content.dir = Some(val);
        }
        if let Ok(val) = std::env::var("RADAR_STORAGE_PATH") {
            config.storage.path = Some(val);
        }
        if let Ok(val) = std::env::var("RADAR_STORAGE_BACKEND") {
            config.storage.backend = Some(val);
        }
        if let Ok(val) = std::env::var("RADAR_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
        if let Ok(val) = std::env::var("RADAR_REPORT_COLOR") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.color = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut RadarConfig, cli: &CliOverrides) {
        if let Some(v) = cli.chart_size {
            config.chart.size = Some(v);
        }
        if let Some(ref v) = cli.report_format {
            config.report.format = Some(v.clone());
        }
        if let Some(v) = cli.report_color {
            config.report.color = Some(v);
        }
        if let Some(ref v) = cli.storage_path {
            config.storage.path = Some(v.clone());
        }
        if let Some(ref v) = cli.storage_backend {
            config.storage.backend = Some(v.clone());
        }
        if let Some(ref v) = cli.content_dir {
            config.content.dir = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level directory: `~/.risk-radar/`.
pub(crate) fn user_dir() -> Option<PathBuf> {
    home_dir().map(|h| h.join(USER_DIR_NAME))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
