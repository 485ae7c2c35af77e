//! Errors raised when building levels, tiers, and risk vectors from raw input.

use super::error_code::{self, RadarErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("level {value} is outside 0..=4")]
    OutOfRange { value: i64 },

    #[error("tier index {value} is outside 0..=3")]
    TierOutOfRange { value: u8 },

    #[error("unknown dimension key: {key}")]
    UnknownDimension { key: String },

    #[error("missing level for dimension {key}")]
    MissingDimension { key: String },
}

impl RadarErrorCode for LevelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } | Self::TierOutOfRange { .. } => {
                error_code::LEVEL_OUT_OF_RANGE
            }
            Self::UnknownDimension { .. } | Self::MissingDimension { .. } => {
                error_code::INVALID_VECTOR
            }
        }
    }
}
