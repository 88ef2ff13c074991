//! Subnet boundaries from an address and a mask.

use crate::models::{decrement_addr, increment_addr, Ipv4, SubnetDescriptor, SubnetMask};
use std::net::Ipv4Addr;

/// Compute network, broadcast, usable host range and capacity.
///
/// The mask is already known to be contiguous, so this cannot fail. For
/// /31 and /32 the host range degenerates: the first host lies past the
/// last one and `total_hosts` is 0 or -1.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_vlsm::models::SubnetMask;
/// use subnet_vlsm::processing::compute_subnet;
///
/// let mask = SubnetMask::from_prefix(24).unwrap();
/// let subnet = compute_subnet(Ipv4Addr::new(192, 168, 1, 77), &mask);
/// assert_eq!(subnet.network_address, Ipv4Addr::new(192, 168, 1, 0));
/// assert_eq!(subnet.total_hosts, 254);
/// ```
pub fn compute_subnet(address: Ipv4Addr, mask: &SubnetMask) -> SubnetDescriptor {
    let network_bits = u32::from(address) & mask.bits();
    let wildcard_bits = !mask.bits();
    let broadcast_bits = network_bits | wildcard_bits;

    let network_address = Ipv4Addr::from(network_bits);
    let broadcast_address = Ipv4Addr::from(broadcast_bits);
    let prefix = mask.prefix();

    SubnetDescriptor {
        network_address,
        broadcast_address,
        first_host: increment_addr(network_address),
        last_host: decrement_addr(broadcast_address),
        total_hosts: (1i64 << (32 - u32::from(prefix))) - 2,
        subnet_mask: *mask,
        wildcard_mask: Ipv4Addr::from(wildcard_bits),
        prefix,
        cidr_notation: Ipv4 {
            addr: address,
            mask: prefix,
        },
        name: None,
        required_hosts: None,
        input_index: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_LENGTH;

    fn subnet(addr: [u8; 4], prefix: u8) -> SubnetDescriptor {
        compute_subnet(
            Ipv4Addr::from(addr),
            &SubnetMask::from_prefix(prefix).unwrap(),
        )
    }

    #[test]
    fn test_compute_subnet_24() {
        let s = subnet([192, 168, 1, 0], 24);
        assert_eq!(s.network_address, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(s.broadcast_address, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(s.first_host, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(s.last_host, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(s.total_hosts, 254);
        assert_eq!(s.subnet_mask.to_string(), "255.255.255.0");
        assert_eq!(s.wildcard_mask, Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(s.cidr_notation.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_compute_subnet_unaligned_address() {
        let s = subnet([10, 20, 30, 77], 27);
        assert_eq!(s.network_address, Ipv4Addr::new(10, 20, 30, 64));
        assert_eq!(s.broadcast_address, Ipv4Addr::new(10, 20, 30, 95));
        assert_eq!(s.first_host, Ipv4Addr::new(10, 20, 30, 65));
        assert_eq!(s.last_host, Ipv4Addr::new(10, 20, 30, 94));
        assert_eq!(s.total_hosts, 30);
        // Keeps the caller's address, not the network address.
        assert_eq!(s.cidr_notation.to_string(), "10.20.30.77/27");
    }

    #[test]
    fn test_compute_subnet_extremes() {
        let all = subnet([8, 8, 8, 8], 0);
        assert_eq!(all.network_address, Ipv4Addr::UNSPECIFIED);
        assert_eq!(all.broadcast_address, Ipv4Addr::BROADCAST);
        assert_eq!(all.total_hosts, 4_294_967_294);

        let p2p = subnet([10, 0, 0, 1], 31);
        assert_eq!(p2p.network_address, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(p2p.broadcast_address, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(p2p.total_hosts, 0);

        let host = subnet([10, 0, 0, 1], 32);
        assert_eq!(host.network_address, host.broadcast_address);
        assert_eq!(host.first_host, Ipv4Addr::new(10, 0, 0, 2));
        assert_eq!(host.last_host, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(host.total_hosts, -1);
    }

    #[test]
    fn test_masking_is_idempotent() {
        let addrs = [[0, 0, 0, 0], [10, 1, 2, 3], [172, 31, 255, 1], [255, 255, 255, 255]];
        for addr in addrs {
            for prefix in 0..=MAX_LENGTH {
                let s = subnet(addr, prefix);
                let mask = s.subnet_mask.bits();
                let network = u32::from(s.network_address);
                let broadcast = u32::from(s.broadcast_address);
                assert_eq!(network & mask, network);
                assert_eq!(broadcast | !mask, broadcast);
                assert_eq!(s.size(), 1u64 << (32 - u32::from(prefix)));
            }
        }
    }
}
