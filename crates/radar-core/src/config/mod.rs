//! Configuration system for the Risk Radar.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod chart_config;
pub mod content_config;
pub mod radar_config;
pub mod report_config;
pub mod storage_config;

pub use chart_config::ChartConfig;
pub use content_config::ContentConfig;
pub use radar_config::{CliOverrides, RadarConfig};
pub use report_config::ReportConfig;
pub use storage_config::{StorageBackend, StorageConfig};
