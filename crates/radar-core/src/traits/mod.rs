//! Port traits. Storage, markup conversion, and system detection sit
//! behind these so the classifier and geometry never depend on them.

pub mod environment;
pub mod markup;
pub mod preference_store;

pub use environment::{ProcessEnvironment, SystemEnvironment};
pub use markup::MarkupConverter;
pub use preference_store::PreferenceStore;
