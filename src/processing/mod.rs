//! Subnet calculation logic.
//!
//! This module contains the algorithms over the domain models:
//! - [`subnet`] - Network/broadcast/host range from an address and mask
//! - [`capacity`] - Admission checks before a VLSM run
//! - [`vlsm`] - Largest-first VLSM allocation

mod capacity;
mod subnet;
mod vlsm;

// Re-export public functions
pub use capacity::{check_capacity, padded_block_size, CapacityReport};
pub use subnet::compute_subnet;
pub use vlsm::{allocate, cidr_from_host_count};
