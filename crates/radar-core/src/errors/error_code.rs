//! RadarErrorCode trait for machine-readable error output.

/// Every error enum implements this to expose a stable code string,
/// used by the JSON reporter and the CLI exit path.
pub trait RadarErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LEVEL_OUT_OF_RANGE: &str = "LEVEL_OUT_OF_RANGE";
pub const INVALID_VECTOR: &str = "INVALID_VECTOR";
pub const GEOMETRY_ERROR: &str = "GEOMETRY_ERROR";
pub const CONTENT_ERROR: &str = "CONTENT_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
