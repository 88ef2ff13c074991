//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures and address arithmetic:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus the codec functions
//! - [`SubnetMask`] - Contiguous subnet mask
//! - [`SubnetDescriptor`] - Computed facts about one subnet
//! - [`HostRequirement`] - A named host-count demand
//! - [`AllocationPlan`] - Ordered VLSM layout inside a base network

mod ipv4;
mod mask;
mod plan;
mod requirement;
mod subnet;

// Re-export public types
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, decrement_addr, format_ipv4, get_cidr_mask,
    increment_addr, ip_after_subnet, mask_to_prefix, num_hosts, parse_ipv4, parse_prefix, Ipv4,
    MAX_LENGTH,
};
pub use mask::SubnetMask;
pub use plan::{AllocationPlan, PlanListing, SortOrder};
pub use requirement::{default_name, parse_host_count, HostRequirement, MAX_HOSTS, MAX_VLSM_HOSTS};
pub use subnet::SubnetDescriptor;
