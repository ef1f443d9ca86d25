//! Hostname resolution.
//!
//! Display names come from the platform's static hosts file first, then
//! from a reverse DNS lookup under a bounded timeout. A miss on both is an
//! absent name, never an error, so resolution can't fail a scan.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use tokio::time;
use tracing::debug;

use sweepr_common::config::ScanConfig;

/// Resolves a display name for an address. Concurrency-safe and free of
/// side effects on shared state.
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn resolve(&self, addr: Ipv4Addr) -> Option<String>;
}

/// Static host mappings, read once before the scan and frozen afterwards.
#[derive(Debug, Clone, Default)]
pub struct StaticHosts {
    names: HashMap<Ipv4Addr, String>,
}

impl StaticHosts {
    /// Loads the platform hosts file. An unreadable file is treated as
    /// empty; the scan proceeds on reverse DNS alone.
    pub fn load() -> Self {
        let path = hosts_path();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) => {
                debug!("could not read {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Self {
        let mut names = HashMap::new();
        for line in contents.lines() {
            let line = line.split('#').next().unwrap_or_default().trim();
            let mut fields = line.split_whitespace();
            let Some(addr) = fields.next() else { continue };
            let Ok(addr) = addr.parse::<Ipv4Addr>() else {
                continue;
            };
            // The first name on the first matching line wins
            if let Some(name) = fields.next() {
                names.entry(addr).or_insert_with(|| name.to_string());
            }
        }
        Self { names }
    }

    pub fn get(&self, addr: Ipv4Addr) -> Option<&str> {
        self.names.get(&addr).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn hosts_path() -> &'static Path {
    if cfg!(windows) {
        Path::new(r"C:\Windows\System32\drivers\etc\hosts")
    } else {
        Path::new("/etc/hosts")
    }
}

/// Hosts-file lookup with reverse DNS fallback.
pub struct SystemResolver {
    hosts: StaticHosts,
    resolver: Option<TokioAsyncResolver>,
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(config: &ScanConfig) -> Self {
        let resolver = (!config.no_dns).then(|| {
            let mut opts = ResolverOpts::default();
            opts.timeout = config.resolve_timeout;
            opts.attempts = 1;
            TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
        });

        Self {
            hosts: StaticHosts::load(),
            resolver,
            timeout: config.resolve_timeout,
        }
    }
}

#[async_trait]
impl NameResolver for SystemResolver {
    async fn resolve(&self, addr: Ipv4Addr) -> Option<String> {
        if let Some(name) = self.hosts.get(addr) {
            return Some(name.to_string());
        }

        let resolver = self.resolver.as_ref()?;
        let lookup = time::timeout(self.timeout, resolver.reverse_lookup(IpAddr::V4(addr)))
            .await
            .ok()?
            .ok()?;

        lookup
            .iter()
            .next()
            .map(|ptr| ptr.to_string().trim_end_matches('.').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOSTS: &str = "\
127.0.0.1   localhost
10.200.40.5 fileserver fileserver.lan  # primary NAS

# gateway lives here
10.200.40.1 gateway
::1         ip6-localhost
not-an-addr junk
10.200.40.5 shadowed
";

    #[test]
    fn parses_addresses_names_and_comments() {
        let hosts = StaticHosts::parse(HOSTS);
        assert_eq!(hosts.get(Ipv4Addr::new(127, 0, 0, 1)), Some("localhost"));
        assert_eq!(hosts.get(Ipv4Addr::new(10, 200, 40, 1)), Some("gateway"));
        assert_eq!(hosts.len(), 3);
    }

    #[test]
    fn first_name_of_first_entry_wins() {
        let hosts = StaticHosts::parse(HOSTS);
        assert_eq!(
            hosts.get(Ipv4Addr::new(10, 200, 40, 5)),
            Some("fileserver"),
            "aliases and later duplicate lines are ignored"
        );
    }

    #[test]
    fn skips_ipv6_and_malformed_lines() {
        let hosts = StaticHosts::parse(HOSTS);
        assert_eq!(hosts.get(Ipv4Addr::new(10, 0, 0, 99)), None);
        assert_eq!(StaticHosts::parse("").len(), 0);
    }
}
