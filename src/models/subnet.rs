//! Computed facts about one subnet.

use super::{Ipv4, SubnetMask};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Result of running the subnet engine over one address/mask pair.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetDescriptor {
    /// Lowest address, host bits all zero.
    pub network_address: Ipv4Addr,
    /// Highest address, host bits all one.
    pub broadcast_address: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    /// `2^(32-prefix) - 2`; 0 for /31 and -1 for /32.
    pub total_hosts: i64,
    pub subnet_mask: SubnetMask,
    pub wildcard_mask: Ipv4Addr,
    pub prefix: u8,
    /// The address as given by the caller with the mask's prefix, e.g. `192.168.1.7/24`.
    pub cidr_notation: Ipv4,
    /// Requirement label, set by the allocator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Hosts requested for this subnet, set by the allocator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_hosts: Option<u32>,
    /// Position of the requirement in the caller's list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_index: Option<usize>,
}

impl SubnetDescriptor {
    /// The subnet as a network block, e.g. `192.168.1.0/24`.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network_address,
            mask: self.prefix,
        }
    }

    /// Addresses covered, network and broadcast included.
    pub fn size(&self) -> u64 {
        u64::from(u32::from(self.broadcast_address)) - u64::from(u32::from(self.network_address))
            + 1
    }

    /// Tag the descriptor with the requirement it was allocated for.
    pub fn with_requirement(mut self, name: &str, hosts: u32, index: usize) -> Self {
        self.name = Some(name.to_string());
        self.required_hosts = Some(hosts);
        self.input_index = Some(index);
        self
    }
}
