//! Rendering and reporting errors.

use super::error_code::{self, RadarErrorCode};
use super::{ContentError, GeometryError};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unknown report format: {format}")]
    UnknownFormat { format: String },

    #[error("chart geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("content: {0}")]
    Content(#[from] ContentError),

    #[error("serialization failed: {message}")]
    Serialization { message: String },
}

impl RadarErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Geometry(e) => e.error_code(),
            Self::Content(e) => e.error_code(),
            _ => error_code::RENDER_ERROR,
        }
    }
}
