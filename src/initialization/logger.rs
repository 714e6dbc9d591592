//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.
//! Logs are written to stderr, so they never interleave with the console report
//! on stdout.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use env_logger::Builder;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// Filters are layered: the CLI `level` and the hickory caps first, then the
/// `RUST_LOG` directives, then `level` again for this crate. `RUST_LOG` can
/// therefore raise or lower any dependency, while `--log-level` always decides
/// for `domain_check` itself.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every lookup and every dropped failure
/// domain_check --log-level debug
///
/// # Lift the hickory cap to see the resolver's own queries
/// RUST_LOG=hickory_resolver=debug domain_check
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let env_filters = std::env::var("RUST_LOG").ok();
    let mut builder = logger_builder(level, format, env_filters.as_deref());
    if let Ok(style) = std::env::var("RUST_LOG_STYLE") {
        builder.parse_write_style(&style);
    }

    // try_init() so a second call (tests) reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Builds the logger without installing it.
fn logger_builder(level: LevelFilter, format: LogFormat, env_filters: Option<&str>) -> Builder {
    let mut builder = Builder::new();

    builder.filter_level(level);
    // hickory logs every malformed or truncated UDP answer at warn
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Error);
    if let Some(filters) = env_filters {
        builder.parse_filters(filters);
    }
    builder.filter_module("domain_check", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder
}
