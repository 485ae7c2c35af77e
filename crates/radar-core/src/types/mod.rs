//! Domain types: dimensions, levels, risk vectors, tiers, mitigations,
//! and the two display preferences.

pub mod dimension;
pub mod level;
pub mod locale;
pub mod mitigation;
pub mod theme;
pub mod tier;
pub mod vector;

pub use dimension::Dimension;
pub use level::Level;
pub use locale::Locale;
pub use mitigation::{MeasureKind, MitigationGroup, MitigationMeasure};
pub use theme::Theme;
pub use tier::TierIndex;
pub use vector::RiskVector;
