//! DNS record data structures.
//!
//! Everything here lives for one lookup batch and is never mutated after the
//! resolver returns it.

use crate::error_handling::{LookupError, LookupKind};
use crate::report::consolidate_errors;

/// A mail exchanger record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    /// Mail exchange hostname.
    pub host: String,
    /// Preference value (lower is tried first by mail servers; never used for sorting here).
    pub preference: u16,
}

impl MxRecord {
    /// Creates an MX record.
    pub fn new(host: impl Into<String>, preference: u16) -> Self {
        Self {
            host: host.into(),
            preference,
        }
    }
}

/// A nameserver delegation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NsRecord {
    /// Nameserver hostname.
    pub host: String,
}

impl NsRecord {
    /// Creates an NS record.
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

/// The result of all five lookups for one domain.
///
/// Each slot holds either the records the resolver returned, in resolver
/// order, or the failure for that query. An empty CNAME string means no alias.
#[derive(Debug)]
pub struct LookupOutcome {
    /// MX records.
    pub mx: Result<Vec<MxRecord>, LookupError>,
    /// CNAME target, empty when absent.
    pub cname: Result<String, LookupError>,
    /// TXT records, one string per record.
    pub txt: Result<Vec<String>, LookupError>,
    /// NS records.
    pub ns: Result<Vec<NsRecord>, LookupError>,
    /// A/AAAA addresses.
    pub addresses: Result<Vec<String>, LookupError>,
}

impl LookupOutcome {
    /// Returns the failure to report for this batch, if any.
    ///
    /// Priority is fixed: MX, CNAME, TXT, NS, then host resolution. The other
    /// failures are not reported.
    pub fn first_error(&self) -> Option<&LookupError> {
        consolidate_errors(self.error_slots())
    }

    /// Every failure in the batch, in priority order.
    pub fn errors(&self) -> Vec<&LookupError> {
        self.error_slots().into_iter().flatten().collect()
    }

    /// Whether the query of the given kind failed.
    pub fn failed(&self, kind: LookupKind) -> bool {
        self.errors().iter().any(|e| e.kind == kind)
    }

    fn error_slots(&self) -> [Option<&LookupError>; 5] {
        [
            self.mx.as_ref().err(),
            self.cname.as_ref().err(),
            self.txt.as_ref().err(),
            self.ns.as_ref().err(),
            self.addresses.as_ref().err(),
        ]
    }
}
