//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping fatal errors to a non-zero exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_check::initialization::init_logger_with;
use domain_check::{run_interactive, Config, SessionOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // A closed console is a normal exit; only stdout failures are fatal
    match run_interactive(config).await {
        Ok(SessionOutcome::Completed) => Ok(()),
        Ok(SessionOutcome::InputClosed) => {
            log::debug!("Console input closed before the session completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_check error: {:#}", e);
            process::exit(1);
        }
    }
}
