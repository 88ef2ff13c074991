//! VLSM allocation plan.

use super::{Ipv4, SubnetDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order in which a plan's subnets are listed. Placement is always
/// largest first and does not depend on it.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Largest requirement first, the allocation order.
    #[default]
    Desc,
    /// Smallest requirement first.
    Asc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => Ok(SortOrder::Desc),
            "asc" | "ascending" => Ok(SortOrder::Asc),
            other => Err(format!("Unknown sort order '{other}' (use desc or asc)")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Desc => write!(f, "desc"),
            SortOrder::Asc => write!(f, "asc"),
        }
    }
}

/// Subnets laid out inside one base block, in allocation order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan {
    /// The base network, host bits cleared.
    pub base: Ipv4,
    pub subnets: Vec<SubnetDescriptor>,
}

/// A plan's subnets as they are shown, in a chosen [`SortOrder`].
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct PlanListing<'a> {
    pub base: Ipv4,
    pub order: SortOrder,
    pub subnets: Vec<&'a SubnetDescriptor>,
}

impl AllocationPlan {
    /// Addresses in the base block.
    pub fn base_size(&self) -> u64 {
        1u64 << (32 - u32::from(self.base.mask))
    }

    /// Addresses taken by allocated subnets, network and broadcast included.
    pub fn allocated_addresses(&self) -> u64 {
        self.subnets.iter().map(SubnetDescriptor::size).sum()
    }

    /// Addresses of the base block left over.
    pub fn free_addresses(&self) -> u64 {
        self.base_size().saturating_sub(self.allocated_addresses())
    }

    /// The subnets re-sorted into the caller's original requirement order.
    pub fn in_input_order(&self) -> Vec<&SubnetDescriptor> {
        let mut subnets: Vec<&SubnetDescriptor> = self.subnets.iter().collect();
        subnets.sort_by_key(|s| s.input_index.unwrap_or(usize::MAX));
        subnets
    }

    /// The subnets listed by requested host count; ties keep input order.
    pub fn listed(&self, order: SortOrder) -> Vec<&SubnetDescriptor> {
        let mut subnets: Vec<&SubnetDescriptor> = self.subnets.iter().collect();
        if order == SortOrder::Asc {
            subnets.sort_by_key(|s| s.required_hosts.unwrap_or(0));
        }
        subnets
    }

    pub fn listing(&self, order: SortOrder) -> PlanListing<'_> {
        PlanListing {
            base: self.base,
            order,
            subnets: self.listed(order),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty()
    }
}
