//! Interactive console application.
//!
//! This module provides the line-oriented console protocol used by the binary:
//! reading the domain and the final Enter, and running one lookup session.

pub mod input;
pub mod session;

// Re-export public API
pub use input::{read_domain, read_line};
pub use session::{run_session, SessionOutcome};
