use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use radar_cli::commands::{execute, write_output};
use radar_cli::{Cli, RadarRuntime, RuntimeOptions};
use radar_core::errors::RadarErrorCode;
use radar_core::tracing::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let runtime = RadarRuntime::new(RuntimeOptions {
        root: Some(cli.root.clone()),
        overrides: cli.overrides(),
    })
    .map_err(|e| anyhow::anyhow!(e.coded_string()))
    .context("failed to initialize")?;

    let output = execute(cli, &runtime).map_err(|e| anyhow::anyhow!(e.coded_string()))?;
    write_output(cli.out.as_deref(), &output).map_err(|e| anyhow::anyhow!(e.coded_string()))?;
    Ok(())
}
