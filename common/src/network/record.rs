use std::net::Ipv4Addr;

/// Classification of an address within its block, fixed at enumeration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Host,
    Network,
    Broadcast,
}

/// Probe outcome for a record.
///
/// Host records start out `Pending` and are written exactly once by the
/// probe pool. Network and broadcast records are never probed and stay
/// `NotApplicable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reachability {
    Pending,
    Up,
    Down,
    NotApplicable,
}

/// One enumerated address and everything the scan learns about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub addr: Ipv4Addr,
    pub role: Role,
    pub reachable: Reachability,
    pub hostname: Option<String>,
}

impl AddressRecord {
    pub fn new(addr: Ipv4Addr, role: Role) -> Self {
        let reachable = match role {
            Role::Host => Reachability::Pending,
            Role::Network | Role::Broadcast => Reachability::NotApplicable,
        };
        Self {
            addr,
            role,
            reachable,
            hostname: None,
        }
    }

    pub fn is_host(&self) -> bool {
        self.role == Role::Host
    }
}
