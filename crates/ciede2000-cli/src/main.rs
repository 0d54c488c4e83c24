//! `ciede2000` — command-line front end for the CIEDE2000 calculator.

mod args;
mod config;
mod error;
mod output;

use std::process::ExitCode;

use ciede2000_core::ciede2000;
use tracing_subscriber::EnvFilter;

use crate::args::{Command, Comparison, USAGE, parse_args};
use crate::config::CliConfig;
use crate::error::CliError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::default();
    match parse_args(std::env::args().skip(1), &config) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Command::Compare(comparison)) => match run(&comparison, &config) {
            Ok(out) => {
                println!("{out}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::debug!("comparison failed: {e:?}");
                eprintln!("error: {e}");
                ExitCode::from(2)
            }
        },
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(comparison: &Comparison, config: &CliConfig) -> Result<String, CliError> {
    tracing::debug!(
        "comparing {:?} and {:?} with {:?}",
        comparison.color1,
        comparison.color2,
        comparison.weights
    );
    let result = ciede2000(&comparison.color1, &comparison.color2, comparison.weights)?;
    tracing::info!("delta_E_00 = {}", result.delta_e_00);
    output::render(&result, comparison.format, comparison.verbose, config.precision)
}
