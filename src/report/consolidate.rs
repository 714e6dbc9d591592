//! Error consolidation.

use crate::error_handling::LookupError;

/// Returns the first failure in `errors`, or `None` if every slot is empty.
///
/// Callers pass the slots in priority order. Failures after the first are
/// dropped; the result says nothing about how many lookups failed.
pub fn consolidate_errors<'a, I>(errors: I) -> Option<&'a LookupError>
where
    I: IntoIterator<Item = Option<&'a LookupError>>,
{
    errors.into_iter().flatten().next()
}
