//! `prefs`: show and change the saved language and theme.

use crate::cli::PrefsCommands;
use crate::error::CliError;
use crate::session::RadarSession;

pub fn run(
    session: &mut RadarSession<'_>,
    command: &PrefsCommands,
    format: &str,
) -> Result<String, CliError> {
    match command {
        PrefsCommands::Show => {}
        PrefsCommands::SetLanguage { locale } => session.set_locale(*locale)?,
        PrefsCommands::SetTheme { theme } => session.set_theme(*theme)?,
        PrefsCommands::ToggleLanguage => {
            session.toggle_locale()?;
        }
        PrefsCommands::ToggleTheme => {
            session.toggle_theme()?;
        }
        PrefsCommands::Reset => session.reset_preferences()?,
    }
    show(session, format)
}

fn show(session: &RadarSession<'_>, format: &str) -> Result<String, CliError> {
    let snapshot = session.preferences();
    if format == "json" {
        return Ok(serde_json::to_string_pretty(&snapshot)?);
    }
    let origin = |explicit: bool| if explicit { "saved" } else { "system" };
    Ok(format!(
        "language: {} ({})\ntheme:    {} ({})\n",
        snapshot.locale,
        origin(snapshot.locale_explicit),
        snapshot.theme,
        origin(snapshot.theme_explicit)
    ))
}
