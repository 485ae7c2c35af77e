//! Command-line structure for `risk-radar`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use radar_core::config::CliOverrides;
use radar_core::{Dimension, Locale, Theme};

/// Vibe-Coding Risk Radar: classify how much care a piece of AI-generated
/// code needs and list the mitigation measures that apply.
#[derive(Debug, Parser)]
#[command(name = "risk-radar")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory searched for `radar.toml`
    #[arg(long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Output format: console, json, markdown, html, svg
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub out: Option<PathBuf>,

    /// Disable ANSI colors in console output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Preference database path
    #[arg(long, global = true)]
    pub storage_path: Option<String>,

    /// Keep preferences in memory for this run only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Directory with `<locale>.toml` content overrides
    #[arg(long, global = true)]
    pub content_dir: Option<String>,

    /// Chart width and height in pixels
    #[arg(long, global = true)]
    pub chart_size: Option<u32>,

    /// Display language for this run (not saved)
    #[arg(long, global = true, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Color theme for this run (not saved)
    #[arg(long, global = true, value_parser = parse_theme)]
    pub theme: Option<Theme>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Flags that take part in config resolution.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            chart_size: self.chart_size,
            report_format: self.format.clone(),
            report_color: self.no_color.then_some(false),
            storage_path: self.storage_path.clone(),
            storage_backend: self.ephemeral.then(|| "memory".to_string()),
            content_dir: self.content_dir.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a risk vector and report the tier and mitigations
    Assess(ReportArgs),

    /// Write the radar chart as a standalone SVG
    Chart(LevelArgs),

    /// Write the self-contained HTML page
    Render(ReportArgs),

    /// List the built-in presets with their tiers
    Presets,

    /// Print the documentation sections
    Docs {
        /// Convert the markup to HTML fragments
        #[arg(long)]
        html: bool,
    },

    /// Show or change the stored display preferences
    #[command(subcommand)]
    Prefs(PrefsCommands),

    /// Print the resolved configuration as TOML
    Config,
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub levels: LevelArgs,

    /// Include the documentation panel
    #[arg(long)]
    pub docs: bool,
}

/// Risk vector input. Explicit levels override the preset.
#[derive(Debug, Clone, Default, Args)]
pub struct LevelArgs {
    /// Start from a preset, e.g. `payment-service`
    #[arg(long)]
    pub preset: Option<String>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub code_type: Option<u8>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub language: Option<u8>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub deployment: Option<u8>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub data: Option<u8>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub blast_radius: Option<u8>,
}

impl LevelArgs {
    /// Levels given on the command line, in dimension order.
    pub fn explicit(&self) -> Vec<(Dimension, u8)> {
        let values = [
            self.code_type,
            self.language,
            self.deployment,
            self.data,
            self.blast_radius,
        ];
        Dimension::ALL
            .into_iter()
            .zip(values)
            .filter_map(|(dimension, value)| value.map(|v| (dimension, v)))
            .collect()
    }
}

#[derive(Debug, Subcommand)]
pub enum PrefsCommands {
    /// Print the current language and theme
    Show,
    /// Save the display language
    SetLanguage {
        #[arg(value_parser = parse_locale)]
        locale: Locale,
    },
    /// Save the color theme
    SetTheme {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
    /// Switch between German and English
    ToggleLanguage,
    /// Switch between dark and light
    ToggleTheme,
    /// Forget saved choices and follow the system again
    Reset,
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    Locale::from_code(s).ok_or_else(|| format!("unsupported language '{s}' (expected de or en)"))
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    Theme::from_code(s).ok_or_else(|| format!("unknown theme '{s}' (expected dark or light)"))
}
