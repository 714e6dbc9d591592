//! DNS resolver initialization.
//!
//! This module builds the hickory resolver behind [`HickoryResolver`]. The only
//! option changed from the resolver's defaults is the address strategy: A and
//! AAAA are always both queried. Timeouts and retries stay as configured.

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::config::NameserverSource;
use crate::dns::HickoryResolver;

/// Initializes the DNS resolver for the selected nameservers.
///
/// `NameserverSource::System` reads the host's resolver configuration. If that
/// configuration cannot be read, the resolver falls back to Google Public DNS
/// and logs a warning.
///
/// Must be called from within a Tokio runtime.
pub fn init_resolver(source: NameserverSource) -> HickoryResolver {
    let (config, opts) = resolver_settings(source);
    HickoryResolver::new(TokioAsyncResolver::tokio(config, opts))
}

/// The nameservers and options for `source`, with the address strategy applied.
fn resolver_settings(source: NameserverSource) -> (ResolverConfig, ResolverOpts) {
    let (config, opts) = match source {
        NameserverSource::System => match read_system_conf() {
            Ok(settings) => {
                debug!("Using system resolver configuration");
                settings
            }
            Err(e) => {
                warn!("Failed to read system resolver configuration, falling back to Google DNS: {e}");
                (ResolverConfig::google(), ResolverOpts::default())
            }
        },
        NameserverSource::Google => (ResolverConfig::google(), ResolverOpts::default()),
        NameserverSource::Cloudflare => (ResolverConfig::cloudflare(), ResolverOpts::default()),
        NameserverSource::Quad9 => (ResolverConfig::quad9(), ResolverOpts::default()),
    };
    (config, with_dual_stack(opts))
}

/// Queries A and AAAA together. hickory's default only asks for AAAA when
/// there is no A record.
fn with_dual_stack(mut opts: ResolverOpts) -> ResolverOpts {
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    opts
}
