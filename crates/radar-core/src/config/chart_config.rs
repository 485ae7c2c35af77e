//! Radar chart configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHART_MARGIN, DEFAULT_CHART_SIZE, DEFAULT_LABEL_OFFSET};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChartConfig {
    /// Edge length of the square chart in pixels. Default: 320.
    pub size: Option<u32>,
    /// Gap between the outer ring and the chart edge. Default: 48.
    pub margin: Option<f64>,
    /// Distance of axis labels beyond the outer ring. Default: 26.
    pub label_offset: Option<f64>,
    /// Draw dimension labels around the chart. Default: true.
    pub show_labels: Option<bool>,
}

impl ChartConfig {
    pub fn effective_size(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_CHART_SIZE)
    }

    pub fn effective_margin(&self) -> f64 {
        self.margin.unwrap_or(DEFAULT_CHART_MARGIN)
    }

    pub fn effective_label_offset(&self) -> f64 {
        self.label_offset.unwrap_or(DEFAULT_LABEL_OFFSET)
    }

    pub fn effective_show_labels(&self) -> bool {
        self.show_labels.unwrap_or(true)
    }
}
