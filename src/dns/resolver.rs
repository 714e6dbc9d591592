//! The resolver seam.
//!
//! The lookup dispatcher only talks to a [`DnsResolver`]. The production
//! implementation is [`super::HickoryResolver`]; tests script their own.

use anyhow::Result;
use async_trait::async_trait;

use super::types::{MxRecord, NsRecord};

/// A DNS resolution capability addressed by domain name.
///
/// Errors are opaque: callers wrap them but never inspect them. An answer
/// with no records of the requested type is an empty `Ok`, not an error.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Mail exchanger records, in resolver order.
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>>;

    /// The canonical name: the end of the alias chain, or the name itself
    /// when it is not an alias. Empty when the name exists without addresses.
    async fn lookup_cname(&self, domain: &str) -> Result<String>;

    /// Text records, one string per record.
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>>;

    /// Nameserver records, in resolver order.
    async fn lookup_ns(&self, domain: &str) -> Result<Vec<NsRecord>>;

    /// IPv4 and IPv6 addresses as strings.
    async fn lookup_host(&self, domain: &str) -> Result<Vec<String>>;
}
