// Shared test helpers: a scripted resolver and a session runner over byte buffers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::anyhow;
use async_trait::async_trait;
use domain_check::{run_session, DnsResolver, LookupStrategy, MxRecord, NsRecord, SessionOutcome};
use tokio::io::BufReader;

/// A resolver whose answers are fixed up front.
///
/// `Err(msg)` makes the corresponding lookup fail with `msg` as the cause.
#[derive(Clone)]
pub struct FakeResolver {
    pub mx: Result<Vec<MxRecord>, String>,
    pub cname: Result<String, String>,
    pub txt: Result<Vec<String>, String>,
    pub ns: Result<Vec<NsRecord>, String>,
    pub host: Result<Vec<String>, String>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl FakeResolver {
    /// Every lookup succeeds with no records.
    pub fn empty() -> Self {
        Self {
            mx: Ok(Vec::new()),
            cname: Ok(String::new()),
            txt: Ok(Vec::new()),
            ns: Ok(Vec::new()),
            host: Ok(Vec::new()),
        }
    }

    /// Every lookup fails with the same cause.
    pub fn failing(cause: &str) -> Self {
        Self {
            mx: Err(cause.to_string()),
            cname: Err(cause.to_string()),
            txt: Err(cause.to_string()),
            ns: Err(cause.to_string()),
            host: Err(cause.to_string()),
        }
    }
}

fn answer<T: Clone>(value: &Result<T, String>) -> anyhow::Result<T> {
    value.clone().map_err(|msg| anyhow!("{msg}"))
}

#[async_trait]
impl DnsResolver for FakeResolver {
    async fn lookup_mx(&self, _domain: &str) -> anyhow::Result<Vec<MxRecord>> {
        answer(&self.mx)
    }

    async fn lookup_cname(&self, _domain: &str) -> anyhow::Result<String> {
        answer(&self.cname)
    }

    async fn lookup_txt(&self, _domain: &str) -> anyhow::Result<Vec<String>> {
        answer(&self.txt)
    }

    async fn lookup_ns(&self, _domain: &str) -> anyhow::Result<Vec<NsRecord>> {
        answer(&self.ns)
    }

    async fn lookup_host(&self, _domain: &str) -> anyhow::Result<Vec<String>> {
        answer(&self.host)
    }
}

/// Wraps a resolver and counts the lookups it serves.
#[allow(dead_code)]
pub struct CountingResolver<R> {
    pub inner: R,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl<R> CountingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl<R: DnsResolver> DnsResolver for CountingResolver<R> {
    async fn lookup_mx(&self, domain: &str) -> anyhow::Result<Vec<MxRecord>> {
        self.hit();
        self.inner.lookup_mx(domain).await
    }

    async fn lookup_cname(&self, domain: &str) -> anyhow::Result<String> {
        self.hit();
        self.inner.lookup_cname(domain).await
    }

    async fn lookup_txt(&self, domain: &str) -> anyhow::Result<Vec<String>> {
        self.hit();
        self.inner.lookup_txt(domain).await
    }

    async fn lookup_ns(&self, domain: &str) -> anyhow::Result<Vec<NsRecord>> {
        self.hit();
        self.inner.lookup_ns(domain).await
    }

    async fn lookup_host(&self, domain: &str) -> anyhow::Result<Vec<String>> {
        self.hit();
        self.inner.lookup_host(domain).await
    }
}

/// Runs a full session with `input` as the console and returns what was printed.
#[allow(dead_code)]
pub async fn run_with_input<D>(
    input: &str,
    resolver: &D,
    strategy: LookupStrategy,
) -> (String, SessionOutcome)
where
    D: DnsResolver,
{
    let mut reader = BufReader::new(input.as_bytes());
    let mut output: Vec<u8> = Vec::new();
    let outcome = run_session(&mut reader, &mut output, resolver, strategy)
        .await
        .expect("writing to an in-memory buffer should not fail");
    let printed = String::from_utf8(output).expect("console output should be UTF-8");
    (printed, outcome)
}
