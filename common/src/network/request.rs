use std::net::Ipv4Addr;

use crate::error::ValidationError;
use crate::network::subnet::Subnet;

/// A validated scan order: walk upward from `start` until `host_count`
/// host addresses have been covered.
///
/// Immutable once built; every constructor path goes through [`validate`].
///
/// [`validate`]: ScanRequest::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRequest {
    pub start: Ipv4Addr,
    pub host_count: usize,
    pub subnet: Subnet,
}

impl ScanRequest {
    /// Checks address syntax, a positive host count and the prefix range.
    ///
    /// Fails before any enumeration or network activity happens.
    pub fn validate(
        start: &str,
        host_count: usize,
        prefix: u8,
    ) -> Result<Self, ValidationError> {
        let start = start
            .trim()
            .parse::<Ipv4Addr>()
            .map_err(|_| ValidationError::InvalidAddress(start.to_string()))?;

        if host_count == 0 {
            return Err(ValidationError::InvalidHostCount);
        }

        let subnet = Subnet::new(prefix)?;

        Ok(Self {
            start,
            host_count,
            subnet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_request() {
        let request = ScanRequest::validate("10.200.40.1", 50, 26).unwrap();
        assert_eq!(request.start, Ipv4Addr::new(10, 200, 40, 1));
        assert_eq!(request.host_count, 50);
        assert_eq!(request.subnet.prefix(), 26);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(ScanRequest::validate(" 192.168.1.1 ", 1, 24).is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["10.0.0", "10.0.0.0.0", "256.1.1.1", "hosts", ""] {
            assert_eq!(
                ScanRequest::validate(bad, 5, 24),
                Err(ValidationError::InvalidAddress(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn rejects_a_zero_host_count() {
        assert_eq!(
            ScanRequest::validate("10.0.0.1", 0, 24),
            Err(ValidationError::InvalidHostCount)
        );
    }

    #[test]
    fn rejects_prefix_33_before_any_work() {
        assert_eq!(
            ScanRequest::validate("10.0.0.1", 5, 33),
            Err(ValidationError::InvalidPrefix(33))
        );
    }
}
