//! Markdown reporter.

use radar_core::errors::RenderError;

use super::Reporter;
use crate::view::RadarView;

pub struct MarkdownReporter;

impl MarkdownReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape markdown injection in headers.
fn escape_markdown_header(s: &str) -> String {
    s.replace('#', "\\#").replace('\n', " ").replace('\r', "")
}

/// Keep table cells on one line and away from column separators.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}

impl Reporter for MarkdownReporter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn generate(&self, view: &RadarView<'_>) -> Result<String, RenderError> {
        let strings = view.content.strings();
        let tier = view.tier_descriptor();

        let mut md = String::new();
        md.push_str(&format!("# {}\n\n", escape_markdown_header(&strings.title)));
        md.push_str(&format!("*{}*\n\n", strings.subtitle));
        md.push_str(&format!("**{}**: {}\n\n", tier.label, tier.description));

        md.push_str("| | | |\n|---|---:|---|\n");
        for (dimension, level) in view.assessment.vector.iter() {
            let descriptor = view.content.dimension(dimension);
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&descriptor.label),
                level.value(),
                escape_cell(descriptor.level_description(level))
            ));
        }
        md.push('\n');

        md.push_str(&format!(
            "## {} ({} {})\n\n",
            escape_markdown_header(&strings.mitigation_heading),
            view.active_measure_count(),
            strings.active
        ));
        md.push_str(&format!(
            "> **{}:** {}\n\n",
            strings.cumulative,
            view.cumulative_note()
        ));

        let badges = view.content.kind_badges();
        for status in view.groups() {
            let group = status.group;
            let heading = format!(
                "{} {} \u{00B7} {}",
                group.icon,
                group.title,
                view.content.measure_count_label(group.measure_count())
            );
            if status.active {
                md.push_str(&format!("### {}\n\n", escape_markdown_header(&heading)));
                for measure in &group.measures {
                    md.push_str(&format!(
                        "- **{}** ({}): {}\n",
                        measure.name,
                        badges.get(measure.kind),
                        measure.description
                    ));
                }
                md.push('\n');
            } else {
                md.push_str(&format!("### ~~{}~~\n\n", escape_markdown_header(&heading)));
            }
        }
        Ok(md)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_and_cells_are_escaped() {
        assert_eq!(escape_markdown_header("a # b\nc"), "a \\# b c");
        assert_eq!(escape_cell("C | C++"), "C \\| C++");
    }
}
