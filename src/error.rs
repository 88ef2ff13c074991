//! Error type shared by the address codec, subnet engine and allocator.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SubnetError>;

/// Every recoverable failure the calculator can report.
///
/// All variants carry the offending input so the caller can render a
/// message without keeping its own copy of the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    #[error("Invalid IP address format: '{0}'")]
    InvalidAddressFormat(String),

    #[error("Invalid prefix length /{0} (must be 0-32)")]
    InvalidPrefixLength(u32),

    #[error("Subnet mask {0} is not a contiguous run of ones")]
    NonContiguousMask(String),

    #[error("Invalid host count '{value}' (must be {min}-{max})")]
    InvalidHostCount { value: String, min: u64, max: u64 },

    #[error("{0}")]
    CapacityExceeded(String),
}

impl SubnetError {
    pub(crate) fn host_count(value: impl ToString, max: u64) -> Self {
        SubnetError::InvalidHostCount {
            value: value.to_string(),
            min: 1,
            max,
        }
    }
}
