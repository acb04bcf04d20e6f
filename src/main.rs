//! Nomen CLI entrypoint: suggest a name for the selected function.

use std::io::{self, Write};
use std::process::ExitCode;

use nomen::{NomenConfig, NomenError};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), NomenError> {
    let config = load_config()?;
    cli::generate_name::run(&config)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`NomenError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<NomenConfig, NomenError> {
    NomenConfig::load().map_err(|error| NomenError::Configuration {
        message: error.to_string(),
    })
}

/// Logs to stderr so stdout only carries the inserted text.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ignored = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
