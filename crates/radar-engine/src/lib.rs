//! # radar-engine
//!
//! The computational core of the Risk Radar:
//! - [`classifier`]: risk vector → tier index (weakest-link policy)
//! - [`geometry`]: polar → Cartesian layout of the radar chart
//! - [`mitigation`]: cumulative unlocking of mitigation groups by tier
//! - [`assessment`]: the combined, serializable result of one evaluation
//!
//! Everything here is pure and synchronous.

pub mod assessment;
pub mod classifier;
pub mod geometry;
pub mod mitigation;

pub use assessment::Assessment;
pub use classifier::{classify, classify_raw, tier_for_max};
pub use geometry::{Point, RadarGeometry, RadarLayout};
pub use mitigation::GroupStatus;
