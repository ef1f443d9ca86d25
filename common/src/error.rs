use thiserror::Error;

/// Input errors caught before any network activity starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid start address '{0}': expected dotted-quad IPv4")]
    InvalidAddress(String),
    #[error("host count must be at least 1")]
    InvalidHostCount,
    #[error("prefix length /{0} is out of range (expected /8 through /32)")]
    InvalidPrefix(u8),
}

/// Failures that abort a whole scan.
///
/// Per-address outcomes (no reply, lookup miss) are never errors; they
/// degrade into the result set instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("address space exhausted: enumeration ran past 255.255.255.255")]
    AddressSpaceExhausted,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
