//! Command handlers. Each returns the text to print; `main` decides where
//! it goes.

pub mod config;
pub mod docs;
pub mod prefs;
pub mod presets;
pub mod report;

use std::io::IsTerminal;
use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::runtime::RadarRuntime;
use crate::session::RadarSession;

/// Run the parsed command against `runtime`.
pub fn execute(cli: &Cli, runtime: &RadarRuntime) -> Result<String, CliError> {
    let mut session = RadarSession::new(runtime)?;
    if let Some(locale) = cli.locale {
        session.override_locale(locale)?;
    }
    if let Some(theme) = cli.theme {
        session.override_theme(theme);
    }

    let format = runtime.config.report.effective_format();
    let color = runtime.config.report.effective_color()
        && cli.out.is_none()
        && std::io::stdout().is_terminal();

    match &cli.command {
        Commands::Assess(args) => report::assess(&mut session, args, format, color),
        Commands::Chart(levels) => report::chart(&mut session, levels),
        Commands::Render(args) => report::render(&mut session, args),
        Commands::Presets => presets::list(&session, format),
        Commands::Docs { html } => docs::print(&session, *html),
        Commands::Prefs(command) => prefs::run(&mut session, command, format),
        Commands::Config => config::show(runtime),
    }
}

/// Print `text` to stdout, or write it to `out`.
pub fn write_output(out: Option<&Path>, text: &str) -> Result<(), CliError> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| CliError::Output {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })?;
            }
            std::fs::write(path, text).map_err(|e| CliError::Output {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            tracing::info!(path = %path.display(), bytes = text.len(), "output written");
            Ok(())
        }
        None => {
            if text.ends_with('\n') {
                print!("{text}");
            } else {
                println!("{text}");
            }
            Ok(())
        }
    }
}
