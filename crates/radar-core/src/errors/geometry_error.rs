//! Radar geometry errors.

use super::error_code::{self, RadarErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("radar needs at least one axis")]
    NoAxes,

    #[error("radius must be finite and positive, got {radius}")]
    InvalidRadius { radius: f64 },

    #[error("chart size {size} leaves no room for margin {margin}")]
    ChartTooSmall { size: f64, margin: f64 },

    #[error("expected {expected} levels for {expected} axes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl RadarErrorCode for GeometryError {
    fn error_code(&self) -> &'static str {
        error_code::GEOMETRY_ERROR
    }
}
