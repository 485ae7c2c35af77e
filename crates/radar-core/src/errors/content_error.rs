//! Errors from loading, validating, and converting localized content.

use super::error_code::{self, RadarErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("no content bundle for locale {locale}")]
    MissingBundle { locale: String },

    #[error("content parse error in {source_name}: {message}")]
    ParseError { source_name: String, message: String },

    #[error("invalid content for {locale} at {field}: {message}")]
    Invalid {
        locale: String,
        field: String,
        message: String,
    },

    #[error("unknown preset: {slug}")]
    UnknownPreset { slug: String },

    #[error("markup conversion failed: {message}")]
    Markup { message: String },

    #[error("content I/O error for {path}: {message}")]
    Io { path: String, message: String },
}

impl RadarErrorCode for ContentError {
    fn error_code(&self) -> &'static str {
        error_code::CONTENT_ERROR
    }
}
