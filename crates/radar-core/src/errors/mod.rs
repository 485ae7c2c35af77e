//! Error handling for the Risk Radar.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod content_error;
pub mod error_code;
pub mod geometry_error;
pub mod level_error;
pub mod render_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use content_error::ContentError;
pub use error_code::RadarErrorCode;
pub use geometry_error::GeometryError;
pub use level_error::LevelError;
pub use render_error::RenderError;
pub use storage_error::StorageError;
