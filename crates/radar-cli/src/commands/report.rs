//! `assess`, `chart`, and `render`.

use radar_core::Level;
use radar_render::create_reporter;

use crate::cli::{LevelArgs, ReportArgs};
use crate::error::CliError;
use crate::session::RadarSession;

/// Apply the preset first, then any explicit levels on top of it.
pub fn apply_levels(session: &mut RadarSession<'_>, levels: &LevelArgs) -> Result<(), CliError> {
    if let Some(ref slug) = levels.preset {
        session.apply_preset(slug)?;
    }
    for (dimension, value) in levels.explicit() {
        session.set_level(dimension, Level::new(value)?)?;
    }
    Ok(())
}

pub fn assess(
    session: &mut RadarSession<'_>,
    args: &ReportArgs,
    format: &str,
    color: bool,
) -> Result<String, CliError> {
    generate(session, args, format, color)
}

pub fn chart(session: &mut RadarSession<'_>, levels: &LevelArgs) -> Result<String, CliError> {
    apply_levels(session, levels)?;
    Ok(create_reporter("svg", false)?.generate(&session.view())?)
}

pub fn render(session: &mut RadarSession<'_>, args: &ReportArgs) -> Result<String, CliError> {
    generate(session, args, "html", false)
}

fn generate(
    session: &mut RadarSession<'_>,
    args: &ReportArgs,
    format: &str,
    color: bool,
) -> Result<String, CliError> {
    apply_levels(session, &args.levels)?;
    session.set_docs_open(args.docs);
    let reporter = create_reporter(format, color)?;
    Ok(reporter.generate(&session.view())?)
}
