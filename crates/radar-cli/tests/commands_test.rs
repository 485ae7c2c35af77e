//! End-to-end command execution against an in-memory runtime.

use std::sync::Arc;

use clap::Parser;
use tempfile::TempDir;

use radar_cli::commands::{execute, write_output};
use radar_cli::{Cli, CliError, RadarRuntime};
use radar_content::ContentRegistry;
use radar_core::traits::{PreferenceStore, SystemEnvironment};
use radar_core::RadarConfig;
use radar_storage::MemoryPreferenceStore;

struct FakeEnv;

impl SystemEnvironment for FakeEnv {
    fn language_tag(&self) -> Option<String> {
        None
    }

    fn prefers_dark(&self) -> Option<bool> {
        Some(true)
    }
}

fn runtime_with_format(format: &str) -> (RadarRuntime, Arc<MemoryPreferenceStore>) {
    let mut config = RadarConfig::default();
    config.report.format = Some(format.to_string());
    let store = Arc::new(MemoryPreferenceStore::new());
    let runtime = RadarRuntime::from_parts(
        config,
        ContentRegistry::builtin(),
        store.clone(),
        Box::new(FakeEnv),
    );
    (runtime, store)
}

fn run(runtime: &RadarRuntime, args: &[&str]) -> Result<String, CliError> {
    let mut argv = vec!["risk-radar"];
    argv.extend_from_slice(args);
    execute(&Cli::parse_from(argv), runtime)
}

fn json(runtime: &RadarRuntime, args: &[&str]) -> serde_json::Value {
    serde_json::from_str(&run(runtime, args).unwrap()).unwrap()
}

// ─── assess ────────────────────────────────────────────────────────────

#[test]
fn payment_service_unlocks_every_group() {
    let (runtime, _) = runtime_with_format("json");
    let report = json(&runtime, &["assess", "--preset", "payment-service"]);
    assert_eq!(report["tier_number"], 4);
    let active: Vec<bool> = report["mitigations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["active"].as_bool().unwrap())
        .collect();
    assert_eq!(active, vec![true, true, true, true]);
}

#[test]
fn css_landing_page_unlocks_first_two_groups() {
    let (runtime, _) = runtime_with_format("json");
    let report = json(&runtime, &["assess", "--preset", "css-landing-page"]);
    assert_eq!(report["tier_number"], 2);
    let active: Vec<bool> = report["mitigations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["active"].as_bool().unwrap())
        .collect();
    assert_eq!(active, vec![true, true, false, false]);
}

#[test]
fn explicit_levels_override_the_preset() {
    let (runtime, _) = runtime_with_format("json");
    let report = json(
        &runtime,
        &["assess", "--preset", "medical-device-fw", "--code-type", "0", "--language", "0",
          "--deployment", "0", "--data", "0", "--blast-radius", "1"],
    );
    assert_eq!(report["tier_number"], 1);
    assert_eq!(report["assessment"]["vector"]["blastRadius"], 1);
}

#[test]
fn unknown_preset_is_a_content_error() {
    let (runtime, _) = runtime_with_format("json");
    let err = run(&runtime, &["assess", "--preset", "nope"]).unwrap_err();
    assert!(matches!(err, CliError::Content(_)));
}

#[test]
fn run_locale_override_switches_content() {
    let (runtime, store) = runtime_with_format("json");
    let report = json(&runtime, &["--locale", "de", "assess"]);
    assert_eq!(report["locale"], "de");
    assert!(store.is_empty());
}

// ─── chart / render ────────────────────────────────────────────────────

#[test]
fn chart_is_svg_regardless_of_format() {
    let (runtime, _) = runtime_with_format("json");
    let svg = run(&runtime, &["chart", "--data", "4"]).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("#ef4444"));
}

#[test]
fn render_uses_system_theme_and_docs_flag() {
    let (runtime, _) = runtime_with_format("console");
    let html = run(&runtime, &["render", "--docs"]).unwrap();
    assert!(html.contains("data-theme=\"dark\""));
    assert!(html.contains("<aside class=\"docs\">"));
}

// ─── presets / docs / config ───────────────────────────────────────────

#[test]
fn presets_list_every_preset_with_its_tier() {
    let (runtime, _) = runtime_with_format("json");
    let rows = json(&runtime, &["presets"]);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    let medical = rows.iter().find(|r| r["slug"] == "medical-device-fw").unwrap();
    assert_eq!(medical["tier"], 4);
}

#[test]
fn docs_as_text_and_html() {
    let (runtime, _) = runtime_with_format("console");
    let text = run(&runtime, &["docs"]).unwrap();
    assert!(text.contains("== \u{26A0}\u{FE0F} "));
    let html = run(&runtime, &["docs", "--html"]).unwrap();
    assert!(html.contains("<div class=\"paragraph\">"));
}

#[test]
fn config_prints_toml() {
    let (runtime, _) = runtime_with_format("markdown");
    let text = run(&runtime, &["config"]).unwrap();
    assert!(text.contains("[report]"));
    assert!(text.contains("format = \"markdown\""));
}

// ─── prefs ─────────────────────────────────────────────────────────────

#[test]
fn prefs_commands_write_through() {
    let (runtime, store) = runtime_with_format("console");

    let shown = run(&runtime, &["prefs", "show"]).unwrap();
    assert!(shown.contains("language: en (system)"));
    assert!(shown.contains("theme:    dark (system)"));

    run(&runtime, &["prefs", "set-language", "de"]).unwrap();
    assert_eq!(store.get("language").unwrap().as_deref(), Some("de"));

    let toggled = run(&runtime, &["prefs", "toggle-theme"]).unwrap();
    assert!(toggled.contains("theme:    light (saved)"));

    run(&runtime, &["prefs", "reset"]).unwrap();
    assert!(store.is_empty());
}

// ─── output ────────────────────────────────────────────────────────────

#[test]
fn write_output_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports").join("radar.svg");
    write_output(Some(&path), "<svg/>").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
}
