//! # radar-bench
//!
//! Benchmarks for the Risk Radar:
//! - **Micro**: classifier and geometry on single vectors
//! - **Component**: one reporter over one assessment
//! - **System**: every vector through classify, layout and render
//!
//! Shared fixtures live in [`fixtures`].

pub mod fixtures;
