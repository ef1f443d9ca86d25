use colored::*;
use sweepr_common::network::record::{AddressRecord, Reachability, Role};

use crate::terminal::colors;

pub const ADDR_WIDTH: usize = 17;
pub const STATUS_WIDTH: usize = 10;
pub const NAME_WIDTH: usize = 45;

/// Address column, tinted by what the scan learned about the record.
pub fn addr_cell(record: &AddressRecord) -> ColoredString {
    let padded: String = format!("{:<width$}", record.addr.to_string(), width = ADDR_WIDTH);
    padded.color(row_color(record))
}

/// Status column: a glyph plus the short status label.
pub fn status_cell(record: &AddressRecord) -> ColoredString {
    let label = match (record.role, record.reachable) {
        (Role::Network, _) => "◆ NTWRK",
        (Role::Broadcast, _) => "◆ BCAST",
        (Role::Host, Reachability::Up) => "● UP",
        (Role::Host, Reachability::Down) => "● DOWN",
        (Role::Host, _) => "● ?",
    };
    let padded: String = format!("{:^width$}", label, width = STATUS_WIDTH);
    match (record.role, record.reachable) {
        (Role::Network, _) => padded.color(colors::NETWORK).bold(),
        (Role::Broadcast, _) => padded.color(colors::BROADCAST).bold(),
        (Role::Host, Reachability::Up) => padded.green().bold(),
        (Role::Host, Reachability::Down) => padded.red().bold(),
        (Role::Host, _) => padded.dimmed(),
    }
}

/// Hostname column; absence renders as a dash, long names get elided.
pub fn name_cell(record: &AddressRecord) -> ColoredString {
    let name = record.hostname.as_deref().unwrap_or("-");
    let elided: String = if name.chars().count() > NAME_WIDTH {
        let head: String = name.chars().take(NAME_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        name.to_string()
    };
    format!("{:<width$}", elided, width = NAME_WIDTH).bright_white()
}

pub fn table_header() -> String {
    let header: String = format!(
        "{:<aw$} {:^sw$} {:<nw$}",
        "IP ADDRESS",
        "STATUS",
        "HOSTNAME",
        aw = ADDR_WIDTH,
        sw = STATUS_WIDTH,
        nw = NAME_WIDTH,
    );
    format!("{}", header.bold().white())
}

fn row_color(record: &AddressRecord) -> Color {
    match (record.role, record.reachable) {
        (Role::Network, _) => colors::NETWORK,
        (Role::Broadcast, _) => colors::BROADCAST,
        (Role::Host, Reachability::Up) => colors::HOST_UP,
        (Role::Host, _) => colors::HOST_DOWN,
    }
}
