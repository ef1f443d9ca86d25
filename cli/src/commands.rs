pub mod scan;

use clap::{Parser, Subcommand};
use sweepr_common::config::DEFAULT_CONCURRENCY;

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(about = "A subnet-aware host reachability scanner.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe a run of host addresses starting at a given IP
    #[command(alias = "s")]
    Scan {
        /// Starting IPv4 address, e.g. 10.200.40.1
        start: String,
        /// Number of host addresses to scan (network/broadcast not counted)
        hosts: usize,
        /// CIDR prefix length of the surrounding subnet
        #[arg(short, long, default_value_t = 24)]
        prefix: u8,
        /// Upper bound on concurrent probes
        #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,
        /// Per-address probe deadline in milliseconds
        #[arg(long, default_value_t = 1000)]
        timeout_ms: u64,
        /// Skip reverse DNS lookups (the static hosts table still applies)
        #[arg(long)]
        no_dns: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
