//! IPv4 address and CIDR notation utilities.
//!
//! Dotted-decimal parsing and formatting, prefix/mask conversion and the
//! 32-bit address arithmetic used by the subnet engine and the allocator.
//! Addresses are carried as [`Ipv4Addr`] and converted to `u32` for bit work.

use crate::error::{Result, SubnetError};
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Four dot-separated decimal octets, no sign, no leading zeros.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(r"^(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})$")
            .expect("Invalid Regex")
    })
}

/// Parse dotted-decimal text into an address.
///
/// Exactly four octets, each `0..=255`. Surrounding whitespace, signs,
/// leading zeros and any other character are rejected.
///
/// # Examples
/// ```
/// use subnet_vlsm::models::parse_ipv4;
/// assert_eq!(parse_ipv4("192.168.1.0").unwrap(), std::net::Ipv4Addr::new(192, 168, 1, 0));
/// assert!(parse_ipv4("192.168.1").is_err());
/// ```
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr> {
    let invalid = || SubnetError::InvalidAddressFormat(text.to_string());
    let caps = get_dotted_quad_regex().captures(text).ok_or_else(invalid)?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps[i + 1].parse::<u8>().map_err(|_| invalid())?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Canonical four-octet text for an address.
pub fn format_ipv4(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_vlsm::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefixLength(len.into()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Count the prefix length of a mask, rejecting masks whose ones are not
/// a single leading run.
pub fn mask_to_prefix(mask: u32) -> Result<u8> {
    let ones = mask.leading_ones();
    if ones + mask.trailing_zeros() != u32::from(MAX_LENGTH) {
        return Err(SubnetError::NonContiguousMask(
            Ipv4Addr::from(mask).to_string(),
        ));
    }
    Ok(ones as u8)
}

/// Next address. `255.255.255.255` wraps to `0.0.0.0`.
pub fn increment_addr(addr: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr).wrapping_add(1))
}

/// Previous address. `0.0.0.0` wraps to `255.255.255.255`.
pub fn decrement_addr(addr: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr).wrapping_sub(1))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Returns the IP address following the `/cidr` block that contains `addr`.
pub fn ip_after_subnet(addr: Ipv4Addr, cidr: u8) -> Result<Ipv4Addr> {
    let subnet_size = 1u64 << (MAX_LENGTH - cidr.min(MAX_LENGTH));
    let network_bits = u32::from(addr) & get_cidr_mask(cidr)?;
    let next_subnet_bits = u32::try_from(u64::from(network_bits) + subnet_size).map_err(|_| {
        SubnetError::CapacityExceeded(format!(
            "No address space left after {addr}/{cidr}"
        ))
    })?;
    Ok(Ipv4Addr::from(next_subnet_bits))
}

/// Number of addresses in a `/len` block, network and broadcast included.
pub fn block_size(len: u8) -> Result<u64> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefixLength(len.into()))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Usable hosts in a `/len` block, `2^(32-len) - 2`.
///
/// Signed on purpose: `/31` yields 0 and `/32` yields -1, the literal value
/// of the formula under the network/broadcast reservation model.
pub fn num_hosts(len: u8) -> Result<i64> {
    Ok(block_size(len)? as i64 - 2)
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let (addr, mask) = addr_cidr
            .trim()
            .split_once('/')
            .ok_or_else(|| SubnetError::InvalidAddressFormat(addr_cidr.to_string()))?;
        if mask.starts_with('/') {
            return Err(SubnetError::InvalidAddressFormat(addr_cidr.to_string()));
        }
        let addr = parse_ipv4(addr)?;
        let mask = parse_prefix(mask)?;
        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Result<Ipv4Addr> {
        cut_addr(self.addr, self.mask)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Result<Ipv4Addr> {
        broadcast_addr(self.addr, self.mask)
    }

    /// The same block with host bits cleared.
    pub fn network(&self) -> Result<Ipv4> {
        Ok(Ipv4 {
            addr: self.lo()?,
            mask: self.mask,
        })
    }

    /// True if `ip` falls inside this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        match (self.lo(), self.hi()) {
            (Ok(lo), Ok(hi)) => lo <= ip && ip <= hi,
            _ => false,
        }
    }
}

/// Parse a prefix length written as `24` or `/24`.
pub fn parse_prefix(text: &str) -> Result<u8> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('/').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubnetError::InvalidAddressFormat(text.to_string()));
    }
    // Too many digits for a u32 is a malformed prefix, not a length to report.
    let len: u32 = digits
        .parse()
        .map_err(|_| SubnetError::InvalidAddressFormat(text.to_string()))?;
    if len > u32::from(MAX_LENGTH) {
        return Err(SubnetError::InvalidPrefixLength(len));
    }
    Ok(len as u8)
}

impl FromStr for Ipv4 {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
