use crate::errors::ContentError;

/// Converts lightweight documentation markup into display markup (HTML).
pub trait MarkupConverter: Send + Sync {
    /// Short identifier, e.g. "asciidoc-lite".
    fn name(&self) -> &'static str;

    fn convert(&self, source: &str) -> Result<String, ContentError>;
}
