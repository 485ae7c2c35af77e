//! # radar-core
//!
//! Foundation crate for the Risk Radar.
//! Defines the domain types (dimensions, levels, risk vectors, tiers,
//! mitigations), the port traits, errors, config, events, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::RadarConfig;
pub use types::{
    Dimension, Level, Locale, MeasureKind, MitigationGroup, MitigationMeasure, RiskVector, Theme,
    TierIndex,
};
