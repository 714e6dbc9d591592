//! Error handling.
//!
//! This module provides:
//! - The lookup failure type reported to the console (`LookupError`)
//! - The query kinds, in consolidation priority order (`LookupKind`)
//! - Initialization and console input errors
//!
//! A lookup failure is data, not control flow: each one is captured next to
//! the result slot it belongs to and handed to the reporter.

mod types;

// Re-export public API
pub use types::{InitializationError, InputError, LookupError, LookupKind};
