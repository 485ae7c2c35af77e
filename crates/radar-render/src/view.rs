//! Everything a reporter needs to present one assessment.

use radar_core::config::ChartConfig;
use radar_core::constants::{
    DEFAULT_CHART_MARGIN, DEFAULT_CHART_SIZE, DEFAULT_LABEL_OFFSET, DIMENSION_COUNT,
};
use radar_core::errors::{GeometryError, RenderError};
use radar_core::{MeasureKind, Theme};
use radar_content::{ContentBundle, TierDescriptor};
use radar_engine::mitigation::{self, GroupStatus};
use radar_engine::{Assessment, RadarGeometry, RadarLayout};

use crate::theme::Palette;

/// Chart dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub size: u32,
    pub margin: f64,
    pub label_offset: f64,
    pub show_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_CHART_SIZE,
            margin: DEFAULT_CHART_MARGIN,
            label_offset: DEFAULT_LABEL_OFFSET,
            show_labels: true,
        }
    }
}

impl ChartOptions {
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            size: config.effective_size(),
            margin: config.effective_margin(),
            label_offset: config.effective_label_offset(),
            show_labels: config.effective_show_labels(),
        }
    }

    pub fn layout(&self) -> Result<RadarLayout, GeometryError> {
        RadarLayout::for_chart(f64::from(self.size), self.margin, DIMENSION_COUNT)
            .map(|layout| layout.with_label_offset(self.label_offset))
    }
}

/// An assessment paired with the content, theme, and chart settings it
/// is shown with.
#[derive(Debug, Clone, Copy)]
pub struct RadarView<'a> {
    pub assessment: &'a Assessment,
    pub content: &'a ContentBundle,
    pub theme: Theme,
    pub chart: ChartOptions,
    pub docs_open: bool,
}

impl<'a> RadarView<'a> {
    pub fn new(assessment: &'a Assessment, content: &'a ContentBundle) -> Self {
        Self {
            assessment,
            content,
            theme: Theme::default(),
            chart: ChartOptions::default(),
            docs_open: false,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_chart(mut self, chart: ChartOptions) -> Self {
        self.chart = chart;
        self
    }

    #[must_use]
    pub fn with_docs_open(mut self, open: bool) -> Self {
        self.docs_open = open;
        self
    }

    pub fn palette(&self) -> &'static Palette {
        Palette::for_theme(self.theme)
    }

    pub fn tier_color(&self) -> &'static str {
        self.assessment.tier.color()
    }

    pub fn tier_descriptor(&self) -> &'a TierDescriptor {
        self.content.tier(self.assessment.tier)
    }

    /// Chart geometry with the short dimension labels as axis labels.
    pub fn geometry(&self) -> Result<RadarGeometry, RenderError> {
        let layout = self.chart.layout()?;
        Ok(layout.build_for_vector(&self.content.short_labels(), &self.assessment.vector)?)
    }

    pub fn groups(&self) -> Vec<GroupStatus<'a>> {
        mitigation::partition(self.content.mitigations(), self.assessment.tier)
    }

    pub fn active_measure_count(&self) -> usize {
        mitigation::active_measures(self.content.mitigations(), self.assessment.tier).len()
    }

    pub fn kind_breakdown(&self) -> std::collections::BTreeMap<MeasureKind, usize> {
        mitigation::kind_breakdown(self.content.mitigations(), self.assessment.tier)
    }

    pub fn cumulative_note(&self) -> String {
        self.content.cumulative_note_for(self.assessment.tier)
    }

    /// Localized labels of the dimensions that set the tier.
    pub fn dominant_labels(&self) -> Vec<&'a str> {
        self.assessment
            .dominant
            .iter()
            .map(|d| self.content.dimension(*d).label.as_str())
            .collect()
    }
}
