//! Error type definitions.
//!
//! This module defines the error types used throughout the application: the
//! per-lookup failure that the console reports, plus the initialization and
//! console input errors that abort a session early.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while reading a line from the interactive console.
#[derive(Error, Debug)]
pub enum InputError {
    /// Input ended before a complete line was read.
    #[error("EOF")]
    UnexpectedEof,

    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The five record queries issued for a domain.
///
/// Variants are declared in consolidation priority order, so iterating with
/// `LookupKind::iter()` visits them from highest to lowest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupKind {
    /// Mail exchanger records.
    Mx,
    /// Canonical name alias.
    Cname,
    /// Text records.
    Txt,
    /// Nameserver delegation records.
    Ns,
    /// A/AAAA address resolution.
    Host,
}

impl LookupKind {
    /// Human readable name used as the prefix of failure messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Mx => "MX lookup",
            LookupKind::Cname => "CNAME lookup",
            LookupKind::Txt => "TXT lookup",
            LookupKind::Ns => "NS lookup",
            LookupKind::Host => "host resolution",
        }
    }
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed lookup: which query failed, for which domain, and why.
///
/// The cause is whatever the resolver reported. It is never classified, so
/// NXDOMAIN, SERVFAIL and timeouts all look the same here.
#[derive(Error, Debug)]
#[error("{kind} failed for {domain}: {source}")]
pub struct LookupError {
    /// The query that failed.
    pub kind: LookupKind,
    /// The domain that was queried.
    pub domain: String,
    /// The resolver's own error.
    #[source]
    pub source: anyhow::Error,
}

impl LookupError {
    /// Wraps a resolver failure with the query kind and domain.
    pub fn new(kind: LookupKind, domain: impl Into<String>, source: anyhow::Error) -> Self {
        Self {
            kind,
            domain: domain.into(),
            source,
        }
    }
}
