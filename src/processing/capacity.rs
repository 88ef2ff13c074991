//! Admission control for VLSM requests.
//!
//! Runs before any placement. The aggregate check pads every requirement to
//! a power-of-two block, which is conservative rather than a packing proof.

use crate::error::{Result, SubnetError};
use crate::models::{block_size, HostRequirement, MAX_VLSM_HOSTS};

/// Figures behind an admission decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    /// Addresses in the base block.
    pub total_available: u64,
    /// Sum of the padded block sizes of all requirements.
    pub total_required: u64,
    /// Largest single host count requested, 0 for an empty request.
    pub max_single: u32,
}

/// Addresses a requirement occupies once rounded up to a whole block.
pub fn padded_block_size(hosts: u32) -> u64 {
    (u64::from(hosts) + 2).next_power_of_two()
}

/// Validate host counts and check that the requirements can fit in a
/// `/base_cidr` network.
pub fn check_capacity(base_cidr: u8, requirements: &[HostRequirement]) -> Result<CapacityReport> {
    let total_available = block_size(base_cidr)?;

    for req in requirements {
        if req.hosts == 0 || req.hosts > MAX_VLSM_HOSTS {
            return Err(SubnetError::host_count(req.hosts, MAX_VLSM_HOSTS.into()));
        }
    }

    let max_single = requirements.iter().map(|r| r.hosts).max().unwrap_or(0);
    let max_possible_hosts = total_available as i64 - 2;
    if i64::from(max_single) > max_possible_hosts {
        return Err(SubnetError::CapacityExceeded(format!(
            "One or more networks require more hosts than the base network can provide (max {max_possible_hosts})"
        )));
    }

    let total_required: u64 = requirements.iter().map(|r| padded_block_size(r.hosts)).sum();
    if total_required > total_available {
        return Err(SubnetError::CapacityExceeded(format!(
            "Total required addresses ({total_required}) exceed available ({total_available}) in base network"
        )));
    }

    Ok(CapacityReport {
        total_available,
        total_required,
        max_single,
    })
}
