//! Subnet-boundary-aware address enumeration.
//!
//! Walks upward from the requested start address and tags every address
//! against its block bounds. Network and broadcast addresses are emitted
//! for display but only host addresses count toward the requested total,
//! so a run can cross block boundaries transparently.

use sweepr_common::error::ScanError;
use sweepr_common::network::record::{AddressRecord, Role};
use sweepr_common::network::request::ScanRequest;

/// Produces the full record sequence for a request, in address order.
///
/// Terminates because the cursor strictly increases and every step either
/// consumes a host slot or passes one of the at most two boundary
/// addresses per block. Fails with [`ScanError::AddressSpaceExhausted`]
/// if the walk would leave the IPv4 address space.
pub fn enumerate(request: &ScanRequest) -> Result<Vec<AddressRecord>, ScanError> {
    let mut records = Vec::with_capacity(request.host_count);
    let mut cursor = u64::from(u32::from(request.start));
    let mut hosts_emitted = 0usize;

    while hosts_emitted < request.host_count {
        if cursor > u64::from(u32::MAX) {
            return Err(ScanError::AddressSpaceExhausted);
        }

        let addr = std::net::Ipv4Addr::from(cursor as u32);
        let role = match request.subnet.block_bounds(addr) {
            Some((network, _)) if addr == network => Role::Network,
            Some((_, broadcast)) if addr == broadcast => Role::Broadcast,
            _ => Role::Host,
        };

        if role == Role::Host {
            hosts_emitted += 1;
        }
        records.push(AddressRecord::new(addr, role));
        cursor += 1;
    }

    Ok(records)
}
