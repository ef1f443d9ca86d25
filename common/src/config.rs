use std::time::Duration;

pub const DEFAULT_CONCURRENCY: usize = 20;
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy)]
pub struct ScanConfig {
    /// Upper bound on in-flight probe workers.
    pub concurrency: usize,
    /// Per-address probe deadline.
    pub probe_timeout: Duration,
    /// Per-address reverse lookup deadline.
    pub resolve_timeout: Duration,
    /// Disables reverse DNS lookups.
    ///
    /// The static hosts table is still consulted.
    pub no_dns: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
            no_dns: false,
        }
    }
}
