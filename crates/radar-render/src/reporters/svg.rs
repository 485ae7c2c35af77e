//! Standalone SVG reporter: the radar chart with literal theme colors.

use radar_core::errors::RenderError;

use super::Reporter;
use crate::svg::{ChartColors, RadarChartSvg};
use crate::view::RadarView;

pub struct SvgReporter;

impl Reporter for SvgReporter {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn generate(&self, view: &RadarView<'_>) -> Result<String, RenderError> {
        let geometry = view.geometry()?;
        let chart = RadarChartSvg::new(
            view.chart.size,
            view.tier_color(),
            ChartColors::Fixed(view.palette()),
        )
        .with_labels(view.chart.show_labels)
        .with_title(view.tier_descriptor().label.clone());
        Ok(chart.render(&geometry))
    }
}
