//! DNS resolution and record querying.
//!
//! This module provides async DNS operations:
//! - Mail exchanger queries (MX records)
//! - Canonical name queries (CNAME records)
//! - Text record queries (TXT records)
//! - Nameserver queries (NS records)
//! - IP address resolution (A/AAAA records)
//!
//! Queries go through the [`DnsResolver`] trait; [`HickoryResolver`] is the
//! `hickory-resolver` implementation used by the binary.

mod dispatch;
mod records;
mod resolver;
mod types;

// Re-export public API
pub use dispatch::lookup_domain;
pub use records::HickoryResolver;
pub use resolver::DnsResolver;
pub use types::{LookupOutcome, MxRecord, NsRecord};
