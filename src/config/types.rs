//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Every default reproduces the plain interactive behavior,
//! so running the binary without flags behaves like the bare prompt loop.

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which upstream nameservers the resolver talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NameserverSource {
    /// The host's resolver configuration (`/etc/resolv.conf` or the OS equivalent)
    System,
    /// Google Public DNS
    Google,
    /// Cloudflare DNS
    Cloudflare,
    /// Quad9
    Quad9,
}

/// How the five record lookups are scheduled.
///
/// Both strategies produce the same outcome and therefore the same output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LookupStrategy {
    /// One lookup after another: MX, CNAME, TXT, address, NS.
    #[default]
    Sequential,
    /// All five lookups in flight at once, joined before reporting.
    Concurrent,
}

/// Application configuration, parsed from the command line.
///
/// # Examples
///
/// ```no_run
/// use domain_check::{Config, NameserverSource};
///
/// let config = Config {
///     nameservers: NameserverSource::Cloudflare,
///     concurrent: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_check",
    version,
    about = "Looks up the MX, CNAME, TXT, NS and address records of a domain"
)]
pub struct Config {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Upstream nameservers to query
    #[arg(long, value_enum, default_value_t = NameserverSource::System)]
    pub nameservers: NameserverSource,

    /// Run the five lookups concurrently instead of one after another
    #[arg(long)]
    pub concurrent: bool,
}

impl Config {
    /// The lookup scheduling selected by `--concurrent`.
    pub fn lookup_strategy(&self) -> LookupStrategy {
        if self.concurrent {
            LookupStrategy::Concurrent
        } else {
            LookupStrategy::Sequential
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            nameservers: NameserverSource::System,
            concurrent: false,
        }
    }
}
