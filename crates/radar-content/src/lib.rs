//! # radar-content
//!
//! Localized content for the Risk Radar: labels, level descriptions,
//! tiers, presets, mitigation groups, and documentation, one TOML bundle
//! per locale. Also hosts the AsciiDoc-lite converter used for the
//! documentation panel.

pub mod bundle;
pub mod markup;
pub mod registry;

pub use bundle::{
    ContentBundle, DimensionDescriptor, DocSection, Documentation, FooterStrings, KindBadges,
    Preset, TierDescriptor, UiStrings,
};
pub use markup::{escape_html, render_documentation, AsciidocLite, RenderedSection};
pub use registry::{ContentRegistry, ResolvedBundle};
