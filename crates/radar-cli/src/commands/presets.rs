//! `presets`: the named vectors shipped with the content.

use std::collections::BTreeMap;

use serde::Serialize;

use radar_engine::classify;

use crate::error::CliError;
use crate::session::RadarSession;

#[derive(Serialize)]
struct PresetRow<'a> {
    slug: &'a str,
    name: &'a str,
    tier: u8,
    tier_label: &'a str,
    values: BTreeMap<String, u8>,
}

pub fn list(session: &RadarSession<'_>, format: &str) -> Result<String, CliError> {
    let content = session.content();
    let rows: Vec<PresetRow<'_>> = content
        .presets()
        .iter()
        .map(|preset| {
            let tier = classify(&preset.values);
            PresetRow {
                slug: &preset.slug,
                name: &preset.name,
                tier: tier.number(),
                tier_label: &content.tier(tier).label,
                values: preset.values.to_map(),
            }
        })
        .collect();

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let mut out = String::new();
    for (preset, row) in content.presets().iter().zip(&rows) {
        let levels: Vec<String> = preset
            .values
            .levels()
            .iter()
            .map(|l| l.value().to_string())
            .collect();
        out.push_str(&format!(
            "{:<22} {:<26} [{}]  {} {}\n",
            row.slug,
            row.name,
            levels.join(" "),
            row.tier,
            row.tier_label
        ));
    }
    Ok(out)
}
