use std::sync::Arc;
use std::time::Instant;

use colored::*;

use sweepr_common::config::ScanConfig;
use sweepr_common::network::report::{ScanResult, Summary};
use sweepr_common::network::request::ScanRequest;
use sweepr_common::success;
use sweepr_core::enumerate::enumerate;
use sweepr_core::probe::SystemPinger;
use sweepr_core::resolve::SystemResolver;
use sweepr_core::scan::{ProgressFn, ScanService};

use crate::terminal::{colors, format, print, spinner};

const SUMMARY_KEY_WIDTH: usize = 12;

pub async fn scan(
    start: &str,
    hosts: usize,
    prefix: u8,
    config: ScanConfig,
) -> anyhow::Result<()> {
    let request = ScanRequest::validate(start, hosts, prefix)?;

    // Walk the range once up front for the scan header; host_count >= 1
    // keeps it non-empty.
    let preview = enumerate(&request)?;
    if let (Some(first), Some(last)) = (preview.first(), preview.last()) {
        print_range_banner(first.addr, last.addr, hosts, &request);
    }

    let bar = spinner::scan_bar(preview.len() as u64);
    let progress: ProgressFn = {
        let bar = bar.clone();
        Box::new(move |done: usize| bar.set_position(done as u64))
    };

    let prober = Arc::new(SystemPinger::new(config.probe_timeout));
    let resolver = Arc::new(SystemResolver::new(&config));
    let service = ScanService::new(prober, resolver, config);

    let started = Instant::now();
    let result = service.run(&request, Some(progress)).await?;
    bar.finish_and_clear();

    print::header("scan results");
    print_table(&result);
    print::blank();
    print_summary(&result.summary);
    print::blank();

    success!("Scan complete in {:.2}s", started.elapsed().as_secs_f64());
    Ok(())
}

fn print_range_banner(
    first: std::net::Ipv4Addr,
    last: std::net::Ipv4Addr,
    hosts: usize,
    request: &ScanRequest,
) {
    let range: String = format!(
        "Scanning {} to {} ({} hosts, {})",
        first.to_string().color(colors::ACCENT),
        last.to_string().color(colors::ACCENT),
        hosts,
        request.subnet
    );

    print::blank();
    print::fat_separator();
    print::centerln(&range);
    print::fat_separator();
    print::blank();
}

fn print_table(result: &ScanResult) {
    print::print(&format::table_header());
    for record in &result.records {
        let row: String = format!(
            "{} {} {}",
            format::addr_cell(record),
            format::status_cell(record),
            format::name_cell(record)
        );
        print::print(&row);
    }
}

fn print_summary(summary: &Summary) {
    print::header("summary");

    let count = |n: usize| n.to_string().bold().bright_white();
    print::aligned_line("●".green(), "Hosts up", SUMMARY_KEY_WIDTH, count(summary.up));
    print::aligned_line("●".red(), "Hosts down", SUMMARY_KEY_WIDTH, count(summary.down));
    print::aligned_line(
        "◆".color(colors::NETWORK),
        "Network",
        SUMMARY_KEY_WIDTH,
        count(summary.network),
    );
    print::aligned_line(
        "◆".color(colors::BROADCAST),
        "Broadcast",
        SUMMARY_KEY_WIDTH,
        count(summary.broadcast),
    );
    print::aligned_line(
        "●".color(colors::ACCENT),
        "Total",
        SUMMARY_KEY_WIDTH,
        count(summary.total),
    );
}
