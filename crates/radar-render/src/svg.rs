//! Radar chart as SVG markup.
//!
//! Five grid rings (the outer one heavier), one spoke per axis, the data
//! polygon filled with the tier color, a dot per vertex, and short labels
//! beyond the outer ring.

use radar_content::escape_html;
use radar_engine::geometry::Point;
use radar_engine::RadarGeometry;

use crate::theme::Palette;

const OUTER_RING_STROKE: f64 = 1.5;
const INNER_RING_STROKE: f64 = 0.7;
const AXIS_STROKE: f64 = 0.7;
const DATA_FILL_OPACITY: f64 = 0.25;
const DATA_STROKE: f64 = 2.5;
const DOT_RADIUS: f64 = 5.0;
const DOT_STROKE: f64 = 1.5;
const LABEL_FONT_SIZE: u32 = 15;
const LABEL_FONT_WEIGHT: u32 = 600;

/// How theme colors are written into the markup.
#[derive(Debug, Clone, Copy)]
pub enum ChartColors {
    /// `var(--grid-line)` etc., resolved by the embedding page.
    Variables,
    /// Literal values from a palette, for standalone files.
    Fixed(&'static Palette),
}

impl ChartColors {
    fn resolve(&self, name: &str) -> String {
        match self {
            Self::Variables => format!("var({name})"),
            Self::Fixed(palette) => palette.get(name).unwrap_or("currentColor").to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RadarChartSvg {
    pub size: u32,
    pub accent: String,
    pub colors: ChartColors,
    pub show_labels: bool,
    /// Accessible description, e.g. the tier label.
    pub title: Option<String>,
}

impl RadarChartSvg {
    pub fn new(size: u32, accent: impl Into<String>, colors: ChartColors) -> Self {
        Self {
            size,
            accent: accent.into(),
            colors,
            show_labels: true,
            title: None,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn render(&self, geometry: &RadarGeometry) -> String {
        let grid = self.colors.resolve("--grid-line");
        let grid_outer = self.colors.resolve("--grid-line-outer");
        let dot_stroke = self.colors.resolve("--dot-stroke");
        let label_fill = self.colors.resolve("--text-secondary");
        let accent = escape_html(&self.accent);
        let size = self.size;

        let mut svg = String::with_capacity(4096);
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size} {size}\" \
             width=\"{size}\" height=\"{size}\" role=\"img\">\n"
        ));
        if let Some(ref title) = self.title {
            svg.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        for ring in &geometry.rings {
            let (stroke, width) = if ring.is_outer() {
                (&grid_outer, OUTER_RING_STROKE)
            } else {
                (&grid, INNER_RING_STROKE)
            };
            svg.push_str(&format!(
                "  <polygon points=\"{}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{width}\"/>\n",
                points_attr(&ring.points)
            ));
        }

        for axis in &geometry.axes {
            svg.push_str(&format!(
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{grid}\" stroke-width=\"{AXIS_STROKE}\"/>\n",
                num(axis.from.x),
                num(axis.from.y),
                num(axis.to.x),
                num(axis.to.y)
            ));
        }

        svg.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"{accent}\" fill-opacity=\"{DATA_FILL_OPACITY}\" \
             stroke=\"{accent}\" stroke-width=\"{DATA_STROKE}\"/>\n",
            points_attr(&geometry.data)
        ));
        for point in &geometry.data {
            svg.push_str(&format!(
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{DOT_RADIUS}\" fill=\"{accent}\" \
                 stroke=\"{dot_stroke}\" stroke-width=\"{DOT_STROKE}\"/>\n",
                num(point.x),
                num(point.y)
            ));
        }

        if self.show_labels {
            for label in &geometry.labels {
                svg.push_str(&format!(
                    "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
                     fill=\"{label_fill}\" font-size=\"{LABEL_FONT_SIZE}\" font-weight=\"{LABEL_FONT_WEIGHT}\">{}</text>\n",
                    num(label.position.x),
                    num(label.position.y),
                    escape_html(&label.text)
                ));
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Coordinates rounded to two decimals, without trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}
