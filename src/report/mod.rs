//! Result reporting.
//!
//! Reduces a lookup batch to at most one error and renders the console
//! report. Both steps are pure; writing the report is the caller's job.

mod consolidate;
mod results;

// Re-export public API
pub use consolidate::consolidate_errors;
pub use results::ResultsReport;
