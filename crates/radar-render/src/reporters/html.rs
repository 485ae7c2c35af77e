//! HTML reporter: a self-contained page with inline CSS.
//!
//! Layout follows the interactive radar: top bar, preset row, chart with
//! tier badge, dimension levels, then the mitigation cards. The
//! documentation panel is included when the view has it open. The page
//! has no scripts and no external resources.

use radar_content::{escape_html, render_documentation, AsciidocLite, RenderedSection};
use radar_core::constants::{MAX_LEVEL, VERSION};
use radar_core::errors::RenderError;
use radar_core::traits::MarkupConverter;
use radar_core::{MeasureKind, TierIndex};
use radar_engine::tier_for_max;

use super::Reporter;
use crate::svg::{ChartColors, RadarChartSvg};
use crate::view::RadarView;

pub const REPOSITORY_URL: &str = "https://github.com/LLM-Coding/vibe-coding-risk-radar";
pub const AUTHOR_NAME: &str = "Ralf D. Müller";
pub const AUTHOR_URL: &str = "https://www.linkedin.com/in/rdmueller";

/// Border color of the disclaimer admonition.
const DISCLAIMER_BORDER: &str = "#f59e0b";

pub struct HtmlReporter {
    converter: Box<dyn MarkupConverter>,
}

impl HtmlReporter {
    pub fn new() -> Self {
        Self::with_converter(Box::new(AsciidocLite::new()))
    }

    pub fn with_converter(converter: Box<dyn MarkupConverter>) -> Self {
        Self { converter }
    }

    fn top_bar(&self, html: &mut String, view: &RadarView<'_>) {
        let strings = view.content.strings();
        let theme_button = if view.theme.is_dark() {
            "\u{2600}\u{FE0F} Light"
        } else {
            "\u{1F319} Dark"
        };
        let docs_button = if view.docs_open {
            &strings.close_button
        } else {
            &strings.docs_button
        };
        html.push_str("<nav class=\"top-bar\">\n");
        html.push_str(&format!("<span class=\"btn\">{theme_button}</span>\n"));
        html.push_str(&format!(
            "<span class=\"btn\">{}</span>\n",
            escape_html(&strings.language_switch)
        ));
        html.push_str(&format!(
            "<span class=\"btn\">{}</span>\n",
            escape_html(docs_button)
        ));
        html.push_str("</nav>\n");
    }

    fn presets(&self, html: &mut String, view: &RadarView<'_>) {
        let current = view.content.preset_matching(&view.assessment.vector);
        let accent = view.tier_color();
        html.push_str("<div class=\"presets\">\n");
        for preset in view.content.presets() {
            let active = current.is_some_and(|p| p.slug == preset.slug);
            let style = if active {
                format!(" style=\"border-color:{accent};color:{accent};background:{accent}18\"")
            } else {
                String::new()
            };
            html.push_str(&format!(
                "<span class=\"preset{}\" data-preset=\"{}\"{style}>{}</span>\n",
                if active { " active" } else { "" },
                escape_html(&preset.slug),
                escape_html(&preset.name)
            ));
        }
        html.push_str("</div>\n");
    }

    fn chart_panel(&self, html: &mut String, view: &RadarView<'_>) -> Result<(), RenderError> {
        let tc = view.tier_color();
        let tier = view.assessment.tier;
        let descriptor = view.tier_descriptor();
        let geometry = view.geometry()?;
        let chart = RadarChartSvg::new(view.chart.size, tc, ChartColors::Variables)
            .with_labels(view.chart.show_labels)
            .with_title(descriptor.label.clone());

        html.push_str("<section class=\"chart-panel\">\n");
        html.push_str(&chart.render(&geometry));
        html.push('\n');
        html.push_str(&format!(
            "<div class=\"tier-badge\" style=\"background:{tc}18;border:2px solid {tc}\">\n\
             <span class=\"tier-number\" style=\"color:{tc}\">{}</span>\n\
             <span class=\"tier-label\" style=\"color:{tc}\">{}</span>\n\
             <p class=\"tier-description\">{}</p>\n</div>\n",
            tier.number(),
            escape_html(&descriptor.label),
            escape_html(&descriptor.description)
        ));
        html.push_str("</section>\n");
        Ok(())
    }

    fn dimensions(&self, html: &mut String, view: &RadarView<'_>) {
        let strings = view.content.strings();
        html.push_str("<section class=\"dimensions\">\n");
        for (dimension, level) in view.assessment.vector.iter() {
            let descriptor = view.content.dimension(dimension);
            let color = tier_for_max(level.value()).color();
            html.push_str(&format!(
                "<div class=\"dimension\" data-dimension=\"{}\">\n\
                 <div class=\"dimension-head\"><span>{}</span><span class=\"level\">{}/{}</span></div>\n\
                 <meter min=\"0\" max=\"{}\" value=\"{}\"></meter>\n\
                 <div class=\"scale\"><span>{}</span><span>{}</span></div>\n\
                 <p class=\"level-description\" style=\"color:{color}\">{}</p>\n</div>\n",
                dimension.key(),
                escape_html(&descriptor.label),
                level.value(),
                MAX_LEVEL,
                MAX_LEVEL,
                level.value(),
                escape_html(&strings.low),
                escape_html(&strings.high),
                escape_html(descriptor.level_description(level))
            ));
        }
        html.push_str("</section>\n");
    }

    fn mitigations(&self, html: &mut String, view: &RadarView<'_>) {
        let strings = view.content.strings();
        let badges = view.content.kind_badges();
        let tc = view.tier_color();

        html.push_str("<section class=\"mitigations\">\n");
        html.push_str(&format!(
            "<h2>{} <span class=\"active-count\">{} {}</span></h2>\n",
            escape_html(&strings.mitigation_heading),
            view.active_measure_count(),
            escape_html(&strings.active)
        ));

        html.push_str("<div class=\"legend\">\n");
        for kind in MeasureKind::ALL {
            let (color, bg) = kind.colors();
            html.push_str(&format!(
                "<span class=\"kind-badge\" style=\"color:{color};background:{bg}\">{}</span>\n",
                escape_html(badges.get(kind))
            ));
        }
        html.push_str("</div>\n");

        html.push_str(&format!(
            "<div class=\"cumulative-note\" style=\"border-left:3px solid {tc}\"><strong>{}:</strong> {}</div>\n",
            escape_html(&strings.cumulative),
            escape_html(&view.cumulative_note())
        ));

        for status in view.groups() {
            let group = status.group;
            let accent = TierIndex::new(group.tier.saturating_sub(1))
                .map(TierIndex::color)
                .unwrap_or(tc);
            let (class, style, open) = if status.active {
                (
                    "card active",
                    format!("border:2px solid {accent};background:{accent}10"),
                    " open",
                )
            } else {
                ("card inactive", String::new(), "")
            };
            html.push_str(&format!(
                "<details class=\"{class}\" data-tier=\"{}\" style=\"{style}\"{open}>\n\
                 <summary><span class=\"icon\">{}</span> <span class=\"card-title\">{}</span> \
                 <span class=\"count\">{}</span></summary>\n",
                group.tier,
                escape_html(&group.icon),
                escape_html(&group.title),
                escape_html(&view.content.measure_count_label(group.measure_count()))
            ));
            for measure in &group.measures {
                let (color, bg) = measure.kind.colors();
                html.push_str(&format!(
                    "<div class=\"measure\" style=\"border-left:3px solid {color}\">\n\
                     <div class=\"measure-head\"><strong>{}</strong> \
                     <span class=\"kind-badge\" style=\"color:{color};background:{bg}\">{}</span></div>\n\
                     <p>{}</p>\n</div>\n",
                    escape_html(&measure.name),
                    escape_html(badges.get(measure.kind)),
                    escape_html(&measure.description)
                ));
            }
            html.push_str("</details>\n");
        }
        html.push_str("</section>\n");
    }

    fn footer(&self, html: &mut String, view: &RadarView<'_>) {
        let footer = view.content.footer();
        html.push_str(&format!(
            "<footer>\n<p>v{VERSION} \u{00B7} \
             <a href=\"{REPOSITORY_URL}\" target=\"_blank\" rel=\"noopener\">{}</a> \u{00B7} \
             <a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></p>\n\
             <p>{} <a href=\"{AUTHOR_URL}\" target=\"_blank\" rel=\"noopener\">{}</a></p>\n</footer>\n",
            escape_html(&footer.github),
            escape_html(&footer.full_docs_href),
            escape_html(&footer.full_docs),
            escape_html(&footer.made_by),
            escape_html(AUTHOR_NAME)
        ));
    }

    fn docs_panel(&self, html: &mut String, view: &RadarView<'_>) -> Result<(), RenderError> {
        let docs = view.content.docs();
        let sections = render_documentation(docs, self.converter.as_ref())?;
        html.push_str("<aside class=\"docs\">\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&docs.title)));
        for section in &sections {
            push_section(html, section);
        }
        html.push_str(&format!(
            "<p class=\"docs-footer\">{}</p>\n",
            escape_html(&docs.footer_note)
        ));
        html.push_str("</aside>\n");
        Ok(())
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_section(html: &mut String, section: &RenderedSection) {
    let style = if section.disclaimer {
        format!(" style=\"border-left:4px solid {DISCLAIMER_BORDER}\"")
    } else {
        String::new()
    };
    let class = if section.disclaimer {
        "doc-section admonition"
    } else {
        "doc-section"
    };
    html.push_str(&format!(
        "<section class=\"{class}\" id=\"{}\"{style}>\n<h3>{}</h3>\n{}\n</section>\n",
        escape_html(&section.id),
        escape_html(&section.title),
        section.html
    ));
}

impl Reporter for HtmlReporter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn generate(&self, view: &RadarView<'_>) -> Result<String, RenderError> {
        let strings = view.content.strings();
        let mut html = String::with_capacity(32 * 1024);

        html.push_str(&format!(
            "<!DOCTYPE html>\n<html lang=\"{}\" data-theme=\"{}\">\n<head>\n",
            view.content.locale().code(),
            view.theme.code()
        ));
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&strings.title)));
        html.push_str("<style>\n");
        html.push_str(&view.palette().css_variables());
        html.push_str(INLINE_CSS);
        html.push_str("</style>\n</head>\n<body>\n");

        self.top_bar(&mut html, view);
        html.push_str("<main class=\"container\">\n");
        html.push_str(&format!(
            "<header>\n<h1>{}</h1>\n<p class=\"subtitle\">{}</p>\n</header>\n",
            escape_html(&strings.title),
            escape_html(&strings.subtitle)
        ));
        self.presets(&mut html, view);
        html.push_str("<div class=\"grid\">\n");
        self.chart_panel(&mut html, view)?;
        self.dimensions(&mut html, view);
        html.push_str("</div>\n");
        self.mitigations(&mut html, view);
        self.footer(&mut html, view);
        html.push_str("</main>\n");

        if view.docs_open {
            self.docs_panel(&mut html, view)?;
        }

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

const INLINE_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: var(--bg-main); color: var(--text-primary); line-height: 1.5; display: flex; }
a { color: var(--link); text-decoration-color: var(--link-underline); }
.top-bar { position: fixed; top: 12px; right: 16px; display: flex; gap: 8px; }
.btn { padding: 6px 12px; border: 1px solid var(--border); border-radius: 8px; background: var(--bg-card); font-size: 13px; }
.container { flex: 1; max-width: 1100px; margin: 0 auto; padding: 48px 24px; }
h1 { color: var(--text-heading); font-size: 28px; }
.subtitle { color: var(--text-muted); margin-bottom: 20px; }
.presets { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 24px; }
.preset { padding: 4px 12px; border: 1px solid var(--border); border-radius: 999px; font-size: 13px; color: var(--text-secondary); }
.grid { display: grid; grid-template-columns: minmax(300px, 1fr) 1fr; gap: 24px; margin-bottom: 32px; }
.chart-panel { background: var(--bg-card); border: 1px solid var(--border-subtle); border-radius: 16px; padding: 16px; box-shadow: var(--shadow); text-align: center; }
.tier-badge { border-radius: 12px; padding: 12px 16px; margin-top: 12px; }
.tier-number { font-size: 32px; font-weight: 800; margin-right: 8px; }
.tier-label { font-size: 20px; font-weight: 700; }
.tier-description { color: var(--text-secondary); font-size: 14px; }
.dimension { margin-bottom: 16px; }
.dimension-head { display: flex; justify-content: space-between; font-weight: 600; }
meter { width: 100%; }
.scale { display: flex; justify-content: space-between; font-size: 11px; color: var(--text-muted); }
.level-description { font-size: 13px; }
.mitigations h2 { color: var(--text-heading); margin-bottom: 8px; }
.active-count { font-size: 14px; color: var(--text-muted); font-weight: 400; }
.legend { display: flex; gap: 8px; margin-bottom: 12px; }
.kind-badge { font-size: 11px; padding: 2px 8px; border-radius: 999px; font-weight: 600; }
.cumulative-note { padding: 8px 12px; margin-bottom: 16px; background: var(--bg-card); color: var(--text-secondary); font-size: 14px; }
.card { border: 1px solid var(--border-subtle); border-radius: 12px; padding: 12px 16px; margin-bottom: 12px; background: var(--bg-card); }
.card.inactive { opacity: 0.45; }
.card summary { cursor: pointer; font-weight: 600; }
.count { color: var(--text-muted); font-weight: 400; font-size: 13px; }
.measure { padding: 6px 10px; margin-top: 8px; }
.measure p { font-size: 13px; color: var(--text-secondary); }
footer { margin-top: 32px; font-size: 13px; color: var(--text-muted); text-align: center; }
.docs { width: 420px; max-height: 100vh; overflow-y: auto; position: sticky; top: 0; background: var(--bg-sidebar); border-left: 1px solid var(--border); padding: 48px 20px; }
.doc-section { margin-bottom: 20px; }
.doc-section.admonition { padding-left: 12px; }
.doc-section h3 { color: var(--text-heading); font-size: 16px; margin-bottom: 6px; }
.doc-section p { font-size: 14px; margin-bottom: 8px; }
.docs-footer { font-size: 12px; color: var(--text-muted); }
"#;
