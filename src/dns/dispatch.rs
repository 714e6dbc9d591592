//! Lookup dispatch.
//!
//! Issues the five record queries for a domain and captures each failure next
//! to its result slot. A failed query never stops the others.

use log::debug;

use crate::config::LookupStrategy;
use crate::error_handling::{LookupError, LookupKind};

use super::resolver::DnsResolver;
use super::types::LookupOutcome;

/// Looks up the MX, CNAME, TXT, NS and address records of `domain`.
///
/// The domain is passed to the resolver as is; no syntax check happens first.
/// With [`LookupStrategy::Sequential`] the queries run in the order MX, CNAME,
/// TXT, address, NS. With [`LookupStrategy::Concurrent`] they are joined
/// before returning. The outcome does not depend on the strategy.
pub async fn lookup_domain<R>(resolver: &R, domain: &str, strategy: LookupStrategy) -> LookupOutcome
where
    R: DnsResolver + ?Sized,
{
    debug!("Looking up records for {domain} ({strategy:?})");

    match strategy {
        LookupStrategy::Sequential => {
            let mx = capture(LookupKind::Mx, domain, resolver.lookup_mx(domain).await);
            let cname = capture(LookupKind::Cname, domain, resolver.lookup_cname(domain).await);
            let txt = capture(LookupKind::Txt, domain, resolver.lookup_txt(domain).await);
            let addresses = capture(LookupKind::Host, domain, resolver.lookup_host(domain).await);
            let ns = capture(LookupKind::Ns, domain, resolver.lookup_ns(domain).await);
            LookupOutcome {
                mx,
                cname,
                txt,
                ns,
                addresses,
            }
        }
        LookupStrategy::Concurrent => {
            let (mx, cname, txt, addresses, ns) = tokio::join!(
                resolver.lookup_mx(domain),
                resolver.lookup_cname(domain),
                resolver.lookup_txt(domain),
                resolver.lookup_host(domain),
                resolver.lookup_ns(domain)
            );
            LookupOutcome {
                mx: capture(LookupKind::Mx, domain, mx),
                cname: capture(LookupKind::Cname, domain, cname),
                txt: capture(LookupKind::Txt, domain, txt),
                ns: capture(LookupKind::Ns, domain, ns),
                addresses: capture(LookupKind::Host, domain, addresses),
            }
        }
    }
}

fn capture<T>(kind: LookupKind, domain: &str, result: anyhow::Result<T>) -> Result<T, LookupError> {
    result.map_err(|e| {
        debug!("{kind} failed for {domain}: {e}");
        LookupError::new(kind, domain, e)
    })
}
