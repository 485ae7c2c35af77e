//! CLI error type: wraps the subsystem errors a command can hit.

use radar_core::errors::{
    ConfigError, ContentError, LevelError, RadarErrorCode, RenderError, StorageError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("cannot write {path}: {message}")]
    Output { path: String, message: String },

    #[error("serialization failed: {message}")]
    Serialization { message: String },
}

impl RadarErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Level(e) => e.error_code(),
            Self::Content(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
            Self::Output { .. } => "OUTPUT_ERROR",
            Self::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}
