use crate::network::record::{AddressRecord, Reachability, Role};

/// Aggregate counts over a finished record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub up: usize,
    pub down: usize,
    pub network: usize,
    pub broadcast: usize,
    pub total: usize,
}

impl Summary {
    /// Single pass over the records; pure, so the counts can always be
    /// recomputed from the record list.
    pub fn tally(records: &[AddressRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.total += 1;
            match record.role {
                Role::Network => summary.network += 1,
                Role::Broadcast => summary.broadcast += 1,
                Role::Host => match record.reachable {
                    Reachability::Up => summary.up += 1,
                    Reachability::Down => summary.down += 1,
                    Reachability::Pending | Reachability::NotApplicable => {}
                },
            }
        }
        summary
    }
}

/// Records in enumeration order plus their summary counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub records: Vec<AddressRecord>,
    pub summary: Summary,
}

impl ScanResult {
    pub fn new(records: Vec<AddressRecord>) -> Self {
        let summary = Summary::tally(&records);
        Self { records, summary }
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;

    fn record(last_octet: u8, role: Role, reachable: Reachability) -> AddressRecord {
        let mut record = AddressRecord::new(Ipv4Addr::new(10, 0, 0, last_octet), role);
        record.reachable = reachable;
        record
    }

    #[test]
    fn tally_counts_every_role_once() {
        let records = vec![
            record(0, Role::Network, Reachability::NotApplicable),
            record(1, Role::Host, Reachability::Up),
            record(2, Role::Host, Reachability::Down),
            record(3, Role::Host, Reachability::Down),
            record(255, Role::Broadcast, Reachability::NotApplicable),
        ];

        let summary = Summary::tally(&records);
        assert_eq!(summary.up, 1);
        assert_eq!(summary.down, 2);
        assert_eq!(summary.network, 1);
        assert_eq!(summary.broadcast, 1);
        assert_eq!(summary.total, records.len());
    }

    #[test]
    fn summary_invariants_hold() {
        let records = vec![
            record(63, Role::Broadcast, Reachability::NotApplicable),
            record(64, Role::Network, Reachability::NotApplicable),
            record(65, Role::Host, Reachability::Up),
            record(66, Role::Host, Reachability::Down),
        ];

        let hosts = records.iter().filter(|r| r.is_host()).count();
        let summary = Summary::tally(&records);

        assert_eq!(summary.total, records.len());
        assert_eq!(summary.up + summary.down, hosts);
        assert_eq!(summary.network + summary.broadcast + hosts, summary.total);
    }
}
