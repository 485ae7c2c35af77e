//! Reporters: output formats for an assessment.
//!
//! 5 formats: console, JSON, Markdown, standalone SVG chart, and a
//! self-contained HTML page.

pub mod console;
pub mod html;
pub mod json;
pub mod markdown;
pub mod svg;

use radar_core::errors::RenderError;

use crate::view::RadarView;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, view: &RadarView<'_>) -> Result<String, RenderError>;
}

/// Create a reporter by format name. `use_color` only affects the
/// console format.
pub fn create_reporter(format: &str, use_color: bool) -> Result<Box<dyn Reporter>, RenderError> {
    tracing::debug!(format, use_color, "creating reporter");
    match format {
        "console" => Ok(Box::new(console::ConsoleReporter::new(use_color))),
        "json" => Ok(Box::new(json::JsonReporter)),
        "markdown" => Ok(Box::new(markdown::MarkdownReporter::new())),
        "html" => Ok(Box::new(html::HtmlReporter::new())),
        "svg" => Ok(Box::new(svg::SvgReporter)),
        _ => Err(RenderError::UnknownFormat {
            format: format.to_string(),
        }),
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json", "markdown", "html", "svg"]
}
