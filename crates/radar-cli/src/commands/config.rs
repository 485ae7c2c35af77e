//! `config`: the resolved configuration.

use crate::error::CliError;
use crate::runtime::RadarRuntime;

pub fn show(runtime: &RadarRuntime) -> Result<String, CliError> {
    Ok(runtime.config.to_toml()?)
}
