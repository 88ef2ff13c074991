//! Variable Length Subnet Masking allocation.
//!
//! Greedy, largest-first: each requirement gets the smallest prefix that
//! holds it, placed right after the previous subnet's broadcast address.
//! No backtracking and no attempt at optimal packing.

use super::capacity::check_capacity;
use super::subnet::compute_subnet;
use crate::error::{Result, SubnetError};
use crate::models::{
    broadcast_addr, cut_addr, ip_after_subnet, AllocationPlan, HostRequirement, Ipv4, SubnetMask,
    MAX_HOSTS, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Smallest prefix whose block holds `hosts` plus network and broadcast,
/// i.e. `32 - ceil(log2(hosts + 2))`.
///
/// # Examples
/// ```
/// use subnet_vlsm::processing::cidr_from_host_count;
/// assert_eq!(cidr_from_host_count(10).unwrap(), 28);
/// assert_eq!(cidr_from_host_count(254).unwrap(), 24);
/// ```
pub fn cidr_from_host_count(hosts: u32) -> Result<u8> {
    if hosts == 0 || hosts > MAX_HOSTS {
        return Err(SubnetError::host_count(hosts, MAX_HOSTS.into()));
    }
    let block = (u64::from(hosts) + 2).next_power_of_two();
    Ok(MAX_LENGTH - block.trailing_zeros() as u8)
}

/// Allocate `requirements` inside `base/base_cidr`, largest first.
///
/// Ties keep the caller's order. Placement starts at the base network
/// address, so every cursor lands on a boundary of the next (smaller or
/// equal) block. Fails with [`SubnetError::CapacityExceeded`] and no partial
/// plan if the admission check rejects the request or a placement runs past
/// the base broadcast address.
pub fn allocate(
    base: Ipv4Addr,
    base_cidr: u8,
    requirements: &[HostRequirement],
) -> Result<AllocationPlan> {
    let base_lo = cut_addr(base, base_cidr)?;
    let base_hi = broadcast_addr(base, base_cidr)?;
    let report = check_capacity(base_cidr, requirements)?;
    log::debug!(
        "allocate {} requirement(s) in {base_lo}/{base_cidr}: {} of {} addresses padded",
        requirements.len(),
        report.total_required,
        report.total_available
    );

    let mut sorted: Vec<(usize, &HostRequirement)> = requirements.iter().enumerate().collect();
    sorted.sort_by(|(_, a), (_, b)| b.hosts.cmp(&a.hosts));

    let mut subnets = Vec::with_capacity(sorted.len());
    let mut cursor = Some(base_lo);

    for (index, req) in sorted {
        let prefix = cidr_from_host_count(req.hosts)?;
        let mask = SubnetMask::from_prefix(prefix)?;
        let overflow = || {
            SubnetError::CapacityExceeded(format!(
                "Network '{}' ({} hosts, /{prefix}) does not fit in {base_lo}/{base_cidr}",
                req.name, req.hosts
            ))
        };

        let start = cursor.ok_or_else(overflow)?;
        let subnet = compute_subnet(start, &mask);
        if subnet.network_address < base_lo || subnet.broadcast_address > base_hi {
            return Err(overflow());
        }
        log::trace!(
            "placed '{}' ({} hosts) at {} [{} - {}]",
            req.name,
            req.hosts,
            subnet.network(),
            subnet.network_address,
            subnet.broadcast_address
        );

        // The last block of the address space leaves nothing after it.
        cursor = ip_after_subnet(subnet.network_address, prefix).ok();
        subnets.push(subnet.with_requirement(&req.name, req.hosts, index));
    }

    Ok(AllocationPlan {
        base: Ipv4 {
            addr: base_lo,
            mask: base_cidr,
        },
        subnets,
    })
}
