//! `docs`: the documentation panel as text or HTML fragments.

use radar_content::{escape_html, render_documentation, AsciidocLite};

use crate::error::CliError;
use crate::session::RadarSession;

pub fn print(session: &RadarSession<'_>, html: bool) -> Result<String, CliError> {
    let docs = session.content().docs();
    let mut out = String::new();

    if html {
        for section in render_documentation(docs, &AsciidocLite::new())? {
            out.push_str(&format!(
                "<section id=\"{}\">\n<h3>{}</h3>\n{}\n</section>\n",
                escape_html(&section.id),
                escape_html(&section.title),
                section.html
            ));
        }
        return Ok(out);
    }

    out.push_str(&format!("{}\n\n", docs.title));
    for section in &docs.sections {
        out.push_str(&format!("== {}\n\n{}\n\n", section.display_title(), section.content.trim()));
    }
    out.push_str(&docs.footer_note);
    out.push('\n');
    Ok(out)
}
