//! Console constants.
//!
//! Text of the interactive prompts and the diagnostic printed when reading
//! from the console fails.

/// Prompt printed before the domain is read. No trailing newline.
pub const DOMAIN_PROMPT: &str = "Enter a domain or host name: ";

/// Pause printed after the report. The two leading newlines separate it from
/// the last record line.
pub const CONTINUE_PROMPT: &str = "\n\nPress Enter to continue...";

/// Prefix of the diagnostic printed when a console read fails.
pub const INPUT_ERROR_PREFIX: &str = "Error reading input:";
