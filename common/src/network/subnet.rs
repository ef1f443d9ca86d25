use std::fmt;
use std::net::Ipv4Addr;

use crate::error::ValidationError;

/// An IPv4 subnet described by its CIDR prefix length.
///
/// Only carries the prefix; block bounds are computed per address, so the
/// same value serves every block a scan walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    prefix: u8,
}

impl Subnet {
    /// Accepts prefix lengths from /8 through /32.
    pub fn new(prefix: u8) -> Result<Self, ValidationError> {
        if !(8..=32).contains(&prefix) {
            return Err(ValidationError::InvalidPrefix(prefix));
        }
        Ok(Self { prefix })
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Number of addresses in one block: `2^(32 - prefix)`.
    pub fn block_size(&self) -> u64 {
        1u64 << (32 - self.prefix)
    }

    /// Network and broadcast addresses of the block containing `addr`.
    ///
    /// Returns `None` for /31 and /32: point-to-point and single-host
    /// subnets reserve no addresses, so nothing is ever classified as
    /// network or broadcast there.
    pub fn block_bounds(&self, addr: Ipv4Addr) -> Option<(Ipv4Addr, Ipv4Addr)> {
        if self.prefix >= 31 {
            return None;
        }
        // prefix >= 8 keeps the block size within u32
        let size = self.block_size() as u32;
        let value = u32::from(addr);
        let network = value - value % size;
        let broadcast = network + size - 1;
        Some((Ipv4Addr::from(network), Ipv4Addr::from(broadcast)))
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_prefixes() {
        assert_eq!(Subnet::new(7), Err(ValidationError::InvalidPrefix(7)));
        assert_eq!(Subnet::new(33), Err(ValidationError::InvalidPrefix(33)));
        assert!(Subnet::new(8).is_ok());
        assert!(Subnet::new(32).is_ok());
    }

    #[test]
    fn block_size_doubles_per_prefix_bit() {
        assert_eq!(Subnet::new(24).unwrap().block_size(), 256);
        assert_eq!(Subnet::new(26).unwrap().block_size(), 64);
        assert_eq!(Subnet::new(32).unwrap().block_size(), 1);
        assert_eq!(Subnet::new(8).unwrap().block_size(), 1 << 24);
    }

    #[test]
    fn bounds_of_a_slash_26_block() {
        let subnet = Subnet::new(26).unwrap();
        let (net, bcast) = subnet
            .block_bounds(Ipv4Addr::new(10, 200, 40, 50))
            .unwrap();
        assert_eq!(net, Ipv4Addr::new(10, 200, 40, 0));
        assert_eq!(bcast, Ipv4Addr::new(10, 200, 40, 63));
    }

    #[test]
    fn bounds_are_idempotent() {
        let subnet = Subnet::new(22).unwrap();
        let addr = Ipv4Addr::new(172, 16, 5, 77);
        assert_eq!(subnet.block_bounds(addr), subnet.block_bounds(addr));
    }

    #[test]
    fn point_to_point_and_single_host_have_no_bounds() {
        let addr = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(Subnet::new(31).unwrap().block_bounds(addr), None);
        assert_eq!(Subnet::new(32).unwrap().block_bounds(addr), None);
    }

    #[test]
    fn boundary_addresses_map_to_their_own_block() {
        let subnet = Subnet::new(24).unwrap();
        let bcast = Ipv4Addr::new(10, 0, 0, 255);
        let (net, b) = subnet.block_bounds(bcast).unwrap();
        assert_eq!(net, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(b, bcast);

        let next_net = Ipv4Addr::new(10, 0, 1, 0);
        let (net, _) = subnet.block_bounds(next_net).unwrap();
        assert_eq!(net, next_net);
    }
}
