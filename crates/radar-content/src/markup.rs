//! AsciiDoc-lite: the subset of AsciiDoc used by the documentation panel.
//!
//! Supported: paragraphs separated by blank lines, `*strong*` spans,
//! `https://url[text]` links and bare URLs. Everything else is escaped.
//! Links open in a new tab.

use std::sync::LazyLock;

use regex::Regex;

use radar_core::errors::ContentError;
use radar_core::traits::MarkupConverter;

use crate::bundle::{DocSection, Documentation};

static LINK: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(https?://[^\s\[\]<>]+)(?:\[([^\]]*)\])?").ok());

static STRONG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\*([^*\s](?:[^*]*[^*\s])?)\*").ok());

/// Characters a bare URL never ends with.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// Escape text for HTML element and attribute content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AsciidocLite;

impl AsciidocLite {
    pub fn new() -> Self {
        Self
    }

    fn inline(&self, text: &str, link: &Regex, strong: &Regex) -> String {
        let mut out = String::with_capacity(text.len() + 64);
        let mut last = 0;
        for caps in link.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            out.push_str(&emphasize(&escape_html(&text[last..whole.start()]), strong));

            let url = &caps[1];
            match caps.get(2) {
                Some(label) if !label.as_str().trim().is_empty() => {
                    out.push_str(&format!(
                        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                        escape_html(url),
                        emphasize(&escape_html(label.as_str()), strong)
                    ));
                }
                _ => {
                    let trimmed = url.trim_end_matches(TRAILING_PUNCTUATION);
                    out.push_str(&format!(
                        "<a href=\"{0}\" class=\"bare\" target=\"_blank\" rel=\"noopener\">{0}</a>",
                        escape_html(trimmed)
                    ));
                    out.push_str(&escape_html(&url[trimmed.len()..]));
                }
            }
            last = whole.end();
        }
        out.push_str(&emphasize(&escape_html(&text[last..]), strong));
        out
    }
}

impl MarkupConverter for AsciidocLite {
    fn name(&self) -> &'static str {
        "asciidoc-lite"
    }

    fn convert(&self, source: &str) -> Result<String, ContentError> {
        let (Some(link), Some(strong)) = (LINK.as_ref(), STRONG.as_ref()) else {
            return Err(ContentError::Markup {
                message: "inline patterns failed to compile".to_string(),
            });
        };

        let blocks: Vec<String> = paragraphs(source)
            .iter()
            .map(|p| {
                format!(
                    "<div class=\"paragraph\">\n<p>{}</p>\n</div>",
                    self.inline(p, link, strong)
                )
            })
            .collect();
        Ok(blocks.join("\n"))
    }
}

fn emphasize(escaped: &str, strong: &Regex) -> String {
    strong
        .replace_all(escaped, "<strong>$1</strong>")
        .into_owned()
}

/// Blank-line separated blocks, each with its lines trimmed and rejoined.
fn paragraphs(source: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n"));
    }
    out
}

/// A documentation section converted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub id: String,
    pub title: String,
    pub html: String,
    pub disclaimer: bool,
}

impl RenderedSection {
    fn from_section(section: &DocSection, html: String) -> Self {
        Self {
            id: section.id.clone(),
            title: section.display_title(),
            html,
            disclaimer: section.is_disclaimer(),
        }
    }
}

/// Convert every section of `docs`, preserving order.
pub fn render_documentation(
    docs: &Documentation,
    converter: &dyn MarkupConverter,
) -> Result<Vec<RenderedSection>, ContentError> {
    docs.sections
        .iter()
        .map(|section| {
            converter
                .convert(&section.content)
                .map(|html| RenderedSection::from_section(section, html))
        })
        .collect()
}
