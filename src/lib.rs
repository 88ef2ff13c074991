//! IPv4 subnet calculator and VLSM allocator.
//!
//! The functions at the crate root take raw text the way a form or a
//! command line delivers it, validate it, and hand off to
//! [`processing`]. Everything is pure: no shared state, no I/O.

pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Result, SubnetError};
pub use models::{AllocationPlan, HostRequirement, SortOrder, SubnetDescriptor};
pub use processing::cidr_from_host_count;

use models::{parse_ipv4, SubnetMask};

/// Subnet facts for an address and a mask given as text.
///
/// The mask may be dotted (`255.255.255.0`) or a prefix (`24`, `/24`).
///
/// # Examples
/// ```
/// let subnet = subnet_vlsm::compute_subnet("192.168.1.0", "255.255.255.0").unwrap();
/// assert_eq!(subnet.broadcast_address.to_string(), "192.168.1.255");
/// assert_eq!(subnet.total_hosts, 254);
/// ```
pub fn compute_subnet(address: &str, mask: &str) -> Result<SubnetDescriptor> {
    let address = parse_ipv4(address)?;
    let mask = SubnetMask::parse(mask)?;
    Ok(processing::compute_subnet(address, &mask))
}

/// VLSM plan for a base address given as text and a prefix length.
///
/// Subnets come back largest first; see [`AllocationPlan::in_input_order`]
/// and [`AllocationPlan::listed`] for other views of the same layout.
pub fn allocate(base: &str, cidr: u8, requirements: &[HostRequirement]) -> Result<AllocationPlan> {
    let base = parse_ipv4(base)?;
    processing::allocate(base, cidr, requirements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_subnet_text() {
        let s = compute_subnet("10.1.2.3", "/16").unwrap();
        assert_eq!(s.network_address.to_string(), "10.1.0.0");
        assert_eq!(s.wildcard_mask.to_string(), "0.0.255.255");

        assert_eq!(
            compute_subnet("10.1.2", "255.255.0.0"),
            Err(SubnetError::InvalidAddressFormat("10.1.2".to_string()))
        );
        assert_eq!(
            compute_subnet("10.1.2.3", "255.0.255.0"),
            Err(SubnetError::NonContiguousMask("255.0.255.0".to_string()))
        );
    }

    #[test]
    fn test_allocate_text() {
        let plan = allocate("192.168.1.0", 24, &[HostRequirement::new("A", 10)]).unwrap();
        assert_eq!(plan.subnets.len(), 1);
        assert!(matches!(
            allocate("192.168.1", 24, &[]),
            Err(SubnetError::InvalidAddressFormat(_))
        ));
    }
}
