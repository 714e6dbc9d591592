//! hickory-backed DNS record queries (MX, CNAME, TXT, NS, A/AAAA).

use anyhow::{Error, Result};
use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::rdata::TXT;
use hickory_resolver::proto::rr::{Name, RData, Record};
use hickory_resolver::TokioAsyncResolver;

use super::resolver::DnsResolver;
use super::types::{MxRecord, NsRecord};

/// [`DnsResolver`] over a hickory `TokioAsyncResolver`.
///
/// Built by [`crate::initialization::init_resolver`].
#[derive(Clone)]
pub struct HickoryResolver {
    inner: TokioAsyncResolver,
}

impl HickoryResolver {
    /// Wraps an already configured hickory resolver.
    pub fn new(inner: TokioAsyncResolver) -> Self {
        Self { inner }
    }
}

/// True when the server answered NOERROR with no records of the queried type.
///
/// NXDOMAIN also arrives as `NoRecordsFound`, but with its own response code,
/// and stays an error.
fn is_no_data(err: &ResolveError) -> bool {
    matches!(
        err.kind(),
        ResolveErrorKind::NoRecordsFound { response_code, .. } if *response_code == ResponseCode::NoError
    )
}

/// Maps a hickory result to an opaque one, turning NODATA into `empty`.
fn or_empty<T, U>(
    result: std::result::Result<T, ResolveError>,
    empty: U,
    map: impl FnOnce(T) -> U,
) -> Result<U> {
    match result {
        Ok(lookup) => Ok(map(lookup)),
        Err(e) if is_no_data(&e) => Ok(empty),
        Err(e) => Err(Error::new(e)),
    }
}

/// Follows the CNAME records in `records` from `query` to the end of the chain.
///
/// Returns `query` itself when it is not an alias.
fn canonical_name(query: &Name, records: &[Record]) -> Name {
    let mut current = query.clone();
    // At most one hop per record, so a looping chain still terminates
    for _ in 0..records.len() {
        let next = records.iter().find_map(|record| match record.data() {
            Some(RData::CNAME(cname)) if *record.name() == current => Some(Name::clone(cname)),
            _ => None,
        });
        match next {
            Some(target) => current = target,
            None => break,
        }
    }
    current
}

/// A TXT record may be split into several character-strings; they form one line.
fn txt_to_string(txt: &TXT) -> String {
    txt.iter()
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .collect()
}

#[async_trait]
impl DnsResolver for HickoryResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>> {
        or_empty(self.inner.mx_lookup(domain).await, Vec::new(), |lookup| {
            lookup
                .iter()
                .map(|mx| MxRecord::new(mx.exchange().to_utf8(), mx.preference()))
                .collect()
        })
    }

    /// The canonical name is read off the address lookup: the end of the
    /// CNAME chain, or the queried name when it is not an alias.
    async fn lookup_cname(&self, domain: &str) -> Result<String> {
        or_empty(self.inner.lookup_ip(domain).await, String::new(), |lookup| {
            let answer = lookup.as_lookup();
            canonical_name(answer.query().name(), answer.records()).to_utf8()
        })
    }

    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>> {
        or_empty(self.inner.txt_lookup(domain).await, Vec::new(), |lookup| {
            lookup.iter().map(txt_to_string).collect()
        })
    }

    async fn lookup_ns(&self, domain: &str) -> Result<Vec<NsRecord>> {
        or_empty(self.inner.ns_lookup(domain).await, Vec::new(), |lookup| {
            lookup.iter().map(|ns| NsRecord::new(ns.to_utf8())).collect()
        })
    }

    async fn lookup_host(&self, domain: &str) -> Result<Vec<String>> {
        or_empty(self.inner.lookup_ip(domain).await, Vec::new(), |lookup| {
            lookup.iter().map(|ip| ip.to_string()).collect()
        })
    }
}
