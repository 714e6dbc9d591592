//! domain_check library: one-shot DNS reconnaissance for a single domain
//!
//! This library looks up the MX, CNAME, TXT, NS and A/AAAA records of a
//! domain and reports them on an interactive console. Any failed lookup
//! replaces the whole report with a single error line, chosen by a fixed
//! priority: MX, CNAME, TXT, NS, then host resolution.
//!
//! # Example
//!
//! ```no_run
//! use domain_check::initialization::init_resolver;
//! use domain_check::{lookup_domain, LookupStrategy, NameserverSource, ResultsReport};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver(NameserverSource::System);
//! let outcome = lookup_domain(&resolver, "example.com", LookupStrategy::Sequential).await;
//! print!("{}", ResultsReport::from_outcome("example.com", &outcome));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod dns;
mod error_handling;
pub mod initialization;
mod report;

// Re-export public API
pub use app::{run_session, SessionOutcome};
pub use config::{Config, LogFormat, LogLevel, LookupStrategy, NameserverSource};
pub use dns::{lookup_domain, DnsResolver, HickoryResolver, LookupOutcome, MxRecord, NsRecord};
pub use error_handling::{InitializationError, InputError, LookupError, LookupKind};
pub use report::{consolidate_errors, ResultsReport};

use anyhow::Result;
use tokio::io::BufReader;

use crate::initialization::init_resolver;

/// Runs one interactive session on stdin/stdout with the given configuration.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
/// Console read failures are reported on stdout and yield
/// [`SessionOutcome::InputClosed`].
pub async fn run_interactive(config: Config) -> Result<SessionOutcome> {
    let resolver = init_resolver(config.nameservers);

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    run_session(&mut stdin, &mut stdout, &resolver, config.lookup_strategy()).await
}
