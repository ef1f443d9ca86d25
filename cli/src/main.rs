mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, scan};
use sweepr_common::config::ScanConfig;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    print::banner();

    match commands.command {
        Commands::Scan {
            start,
            hosts,
            prefix,
            concurrency,
            timeout_ms,
            no_dns,
        } => {
            let config = ScanConfig {
                concurrency,
                probe_timeout: Duration::from_millis(timeout_ms),
                no_dns,
                ..ScanConfig::default()
            };
            scan::scan(&start, hosts, prefix, config).await
        }
    }
}
