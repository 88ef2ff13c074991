//! Subnet mask value.

use super::ipv4::{get_cidr_mask, mask_to_prefix, parse_ipv4, parse_prefix};
use crate::error::{Result, SubnetError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A subnet mask whose ones form a single leading run.
///
/// Only constructible through [`SubnetMask::from_prefix`] or by parsing, so
/// every value held by the engine is contiguous.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetMask {
    bits: u32,
    prefix: u8,
}

impl SubnetMask {
    /// Mask with `prefix` leading ones.
    pub fn from_prefix(prefix: u8) -> Result<SubnetMask> {
        let bits = get_cidr_mask(prefix)?;
        Ok(SubnetMask { bits, prefix })
    }

    /// Accept a mask from an external caller, checking contiguity.
    pub fn from_addr(mask: Ipv4Addr) -> Result<SubnetMask> {
        let bits = u32::from(mask);
        let prefix = mask_to_prefix(bits)?;
        Ok(SubnetMask { bits, prefix })
    }

    /// Parse a dotted mask (`255.255.255.0`) or a prefix (`24`, `/24`).
    pub fn parse(text: &str) -> Result<SubnetMask> {
        if text.contains('.') {
            SubnetMask::from_addr(parse_ipv4(text)?)
        } else {
            SubnetMask::from_prefix(parse_prefix(text)?)
        }
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.bits)
    }

    /// Bitwise complement of the mask.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.bits)
    }
}

impl FromStr for SubnetMask {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        SubnetMask::parse(s)
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.addr())
    }
}

impl Serialize for SubnetMask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
