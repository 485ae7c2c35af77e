//! Shared constants for the Risk Radar.

/// Risk Radar version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of risk dimensions.
pub const DIMENSION_COUNT: usize = 5;

/// Number of levels per dimension (0..=4).
pub const LEVEL_COUNT: usize = 5;

/// Highest level value a dimension can hold.
pub const MAX_LEVEL: u8 = 4;

/// Levels a new session starts with, in dimension order.
pub const INITIAL_LEVELS: [u8; DIMENSION_COUNT] = [0, 1, 0, 0, 0];

/// Number of risk tiers.
pub const TIER_COUNT: usize = 4;

/// Number of concentric grid rings on the radar chart.
pub const GRID_RING_COUNT: usize = 5;

// ---- Chart defaults ----

/// Default chart edge length in pixels.
pub const DEFAULT_CHART_SIZE: u32 = 320;

/// Default gap between the outer ring and the chart edge.
pub const DEFAULT_CHART_MARGIN: f64 = 48.0;

/// Default distance of axis labels beyond the outer ring.
pub const DEFAULT_LABEL_OFFSET: f64 = 26.0;

/// Smallest chart size accepted by config validation.
pub const MIN_CHART_SIZE: u32 = 64;

/// Largest chart size accepted by config validation.
pub const MAX_CHART_SIZE: u32 = 4096;

// ---- Colors ----

/// Accent color per tier index (green, amber, orange, red).
pub const TIER_COLORS: [&str; TIER_COUNT] = ["#10b981", "#f59e0b", "#f97316", "#ef4444"];

// ---- Preferences ----

/// Preference key holding the display language.
pub const PREF_LANGUAGE: &str = "language";

/// Preference key holding the color theme.
pub const PREF_THEME: &str = "theme";

// ---- Files & environment ----

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "radar.toml";

/// User-level directory under `$HOME`.
pub const USER_DIR_NAME: &str = ".risk-radar";

/// Default SQLite preference file inside the user directory.
pub const DEFAULT_PREFERENCES_FILE: &str = "preferences.db";

/// Environment variable controlling the log filter.
pub const LOG_ENV_VAR: &str = "RADAR_LOG";

/// Filter used when `RADAR_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "radar=info";

// ---- Output ----

/// Default report format.
pub const DEFAULT_REPORT_FORMAT: &str = "console";

/// Report formats understood by the renderer.
pub const REPORT_FORMATS: [&str; 5] = ["console", "json", "markdown", "html", "svg"];

/// Storage backends understood by the preference layer.
pub const STORAGE_BACKENDS: [&str; 2] = ["sqlite", "memory"];
