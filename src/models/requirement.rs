//! Host requirements fed to the VLSM allocator.

use crate::error::{Result, SubnetError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest host count accepted for a VLSM requirement (a full /8).
pub const MAX_VLSM_HOSTS: u32 = 16_777_214;

/// Largest host count any prefix can hold, `2^32 - 2` (a /0).
pub const MAX_HOSTS: u32 = u32::MAX - 1;

/// One named demand for a subnet of at least `hosts` usable addresses.
///
/// Names are labels only; duplicates are allowed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HostRequirement {
    pub name: String,
    pub hosts: u32,
}

impl HostRequirement {
    pub fn new(name: impl Into<String>, hosts: u32) -> Self {
        HostRequirement {
            name: name.into(),
            hosts,
        }
    }
}

/// Strictly parse a host count in `1..=max`.
///
/// Empty, signed, fractional or out of range input is an
/// [`SubnetError::InvalidHostCount`]; nothing defaults to zero.
pub fn parse_host_count(text: &str, max: u32) -> Result<u32> {
    let trimmed = text.trim();
    let invalid = || SubnetError::host_count(trimmed, max.into());
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match trimmed.parse::<u32>() {
        Ok(hosts) if (1..=max).contains(&hosts) => Ok(hosts),
        _ => Err(invalid()),
    }
}

/// Default label for the requirement at `index`: `Network A`, `Network B`, ...
pub fn default_name(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => format!("Network {}", (b'A' + i) as char),
        _ => format!("Network {}", index + 1),
    }
}

impl FromStr for HostRequirement {
    type Err = SubnetError;

    /// Parse `name:hosts` or `name=hosts`. A bare number gets an empty name.
    fn from_str(s: &str) -> Result<Self> {
        let (name, hosts) = match s.rsplit_once(|c: char| c == ':' || c == '=') {
            Some((name, hosts)) => (name.trim(), hosts),
            None => ("", s),
        };
        Ok(HostRequirement {
            name: name.to_string(),
            hosts: parse_host_count(hosts, MAX_VLSM_HOSTS)?,
        })
    }
}

impl fmt::Display for HostRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.hosts)
    }
}
