//! # radar-cli
//!
//! The `risk-radar` command: parses arguments, wires config, content,
//! preference storage and events into a [`runtime::RadarRuntime`], and runs
//! one command against a [`session::RadarSession`].

pub mod cli;
pub mod commands;
pub mod error;
pub mod runtime;
pub mod session;

pub use cli::Cli;
pub use error::CliError;
pub use runtime::{RadarRuntime, RuntimeOptions};
pub use session::RadarSession;
