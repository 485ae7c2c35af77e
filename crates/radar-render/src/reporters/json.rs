//! JSON reporter: machine-readable assessment, content, and chart geometry.

use std::collections::BTreeMap;

use serde::Serialize;

use radar_core::constants::VERSION;
use radar_core::errors::RenderError;
use radar_core::{Dimension, Locale, MeasureKind, MitigationMeasure, Theme};
use radar_engine::{Assessment, RadarGeometry};

use super::Reporter;
use crate::view::RadarView;

pub struct JsonReporter;

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    locale: Locale,
    theme: Theme,
    assessment: &'a Assessment,
    tier_number: u8,
    tier_label: &'a str,
    tier_description: &'a str,
    tier_color: &'static str,
    levels: Vec<JsonLevel<'a>>,
    mitigations: Vec<JsonGroup<'a>>,
    active_measure_count: usize,
    kind_breakdown: BTreeMap<MeasureKind, usize>,
    cumulative_note: String,
    chart: RadarGeometry,
}

#[derive(Serialize)]
struct JsonLevel<'a> {
    dimension: Dimension,
    label: &'a str,
    level: u8,
    description: &'a str,
}

#[derive(Serialize)]
struct JsonGroup<'a> {
    tier: u8,
    title: &'a str,
    icon: &'a str,
    active: bool,
    measures: &'a [MitigationMeasure],
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, view: &RadarView<'_>) -> Result<String, RenderError> {
        let tier = view.tier_descriptor();
        let report = JsonReport {
            version: VERSION,
            locale: view.content.locale(),
            theme: view.theme,
            assessment: view.assessment,
            tier_number: view.assessment.tier.number(),
            tier_label: &tier.label,
            tier_description: &tier.description,
            tier_color: view.tier_color(),
            levels: view
                .assessment
                .vector
                .iter()
                .map(|(dimension, level)| {
                    let descriptor = view.content.dimension(dimension);
                    JsonLevel {
                        dimension,
                        label: &descriptor.label,
                        level: level.value(),
                        description: descriptor.level_description(level),
                    }
                })
                .collect(),
            mitigations: view
                .groups()
                .into_iter()
                .map(|status| JsonGroup {
                    tier: status.group.tier,
                    title: &status.group.title,
                    icon: &status.group.icon,
                    active: status.active,
                    measures: &status.group.measures,
                })
                .collect(),
            active_measure_count: view.active_measure_count(),
            kind_breakdown: view.kind_breakdown(),
            cumulative_note: view.cumulative_note(),
            chart: view.geometry()?,
        };
        serde_json::to_string_pretty(&report).map_err(|e| RenderError::Serialization {
            message: e.to_string(),
        })
    }
}
