//! Console reporter: human-readable output with optional ANSI colors.

use radar_core::constants::MAX_LEVEL;
use radar_core::errors::RenderError;
use radar_core::{MeasureKind, TierIndex};
use radar_engine::tier_for_max;

use super::Reporter;
use crate::view::RadarView;

/// Width of the dimension label column.
const LABEL_WIDTH: usize = 20;

pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn tier_color(&self, tier: TierIndex) -> &'static str {
        if !self.use_color {
            return "";
        }
        match tier.index() {
            0 => "\x1b[32m",       // green
            1 => "\x1b[33m",       // amber
            2 => "\x1b[38;5;208m", // orange
            _ => "\x1b[31m",       // red
        }
    }

    fn kind_color(&self, kind: MeasureKind) -> &'static str {
        if !self.use_color {
            return "";
        }
        match kind {
            MeasureKind::Deterministic => "\x1b[36m",  // cyan
            MeasureKind::Probabilistic => "\x1b[35m",  // magenta
            MeasureKind::Organizational => "\x1b[33m", // yellow
        }
    }

    fn dim(&self) -> &'static str {
        if self.use_color {
            "\x1b[2m"
        } else {
            ""
        }
    }

    fn bold(&self) -> &'static str {
        if self.use_color {
            "\x1b[1m"
        } else {
            ""
        }
    }

    fn reset(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Level meter: one filled cell per step from 0 up to `value`.
fn meter(value: u8) -> String {
    let filled = usize::from(value) + 1;
    let total = usize::from(MAX_LEVEL) + 1;
    format!("{}{}", "█".repeat(filled), "░".repeat(total - filled))
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, view: &RadarView<'_>) -> Result<String, RenderError> {
        let strings = view.content.strings();
        let tier = view.assessment.tier;
        let descriptor = view.tier_descriptor();
        let (tc, b, d, r) = (self.tier_color(tier), self.bold(), self.dim(), self.reset());

        let mut out = String::new();
        out.push_str(&format!("{b}{}{r}\n", strings.title));
        out.push_str(&format!("{d}{}{r}\n\n", strings.subtitle));

        out.push_str(&format!(
            "{tc}{b}[{}] {}{r}  {}\n",
            tier.number(),
            descriptor.label,
            descriptor.description
        ));
        if view.assessment.max_level.value() > 0 {
            out.push_str(&format!("{d}  \u{2191} {}{r}\n", view.dominant_labels().join(", ")));
        }
        out.push('\n');

        for (dimension, level) in view.assessment.vector.iter() {
            let descriptor = view.content.dimension(dimension);
            let lc = self.tier_color(tier_for_max(level.value()));
            out.push_str(&format!(
                "  {} {lc}{}{r} {}/{}  {}\n",
                pad(&descriptor.label, LABEL_WIDTH),
                meter(level.value()),
                level.value(),
                MAX_LEVEL,
                descriptor.level_description(level)
            ));
        }
        out.push('\n');

        out.push_str(&format!(
            "{b}{}{r} ({} {})\n",
            strings.mitigation_heading,
            view.active_measure_count(),
            strings.active
        ));
        out.push_str(&format!("{d}{}: {}{r}\n\n", strings.cumulative, view.cumulative_note()));

        let badges = view.content.kind_badges();
        for status in view.groups() {
            let group = status.group;
            let marker = if status.active { "\u{25BE}" } else { "\u{25B8}" };
            let shade = if status.active { "" } else { d };
            out.push_str(&format!(
                "{shade}{marker} {} {}  \u{00B7} {}{r}\n",
                group.icon,
                group.title,
                view.content.measure_count_label(group.measure_count())
            ));
            if !status.active {
                continue;
            }
            for measure in &group.measures {
                out.push_str(&format!(
                    "    {}\u{2502}{r} {b}{}{r} {}[{}]{r}\n      {d}{}{r}\n",
                    self.kind_color(measure.kind),
                    measure.name,
                    self.kind_color(measure.kind),
                    badges.get(measure.kind),
                    measure.description
                ));
            }
        }
        Ok(out)
    }
}
