//! Network, broadcast and host range for a CIDR block.

use crate::models::{Ipv4Address, Subnet, MAX_LENGTH};
use serde::Serialize;

/// Derived addresses for a [`Subnet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubnetSummary {
    pub network: Ipv4Address,
    pub broadcast: Ipv4Address,
    pub first_host: Ipv4Address,
    pub last_host: Ipv4Address,
    pub usable_host_count: u64,
}

/// Get the network address for a given address and prefix length.
pub fn network_addr(subnet: &Subnet) -> Ipv4Address {
    Ipv4Address::from_bits(subnet.base().to_bits() & subnet.mask())
}

/// Calculate the broadcast (highest) address of a subnet.
pub fn broadcast_addr(subnet: &Subnet) -> Ipv4Address {
    let mask = subnet.mask();
    let network_bits = subnet.base().to_bits() & mask;
    Ipv4Address::from_bits(network_bits | !mask)
}

/// Number of usable host addresses for a prefix length.
///
/// Network and broadcast are reserved up to /30. A /31 is a point-to-point
/// link with both addresses usable and a /32 is a single host route.
pub fn num_hosts(len: u8) -> u64 {
    match len {
        0..=30 => (1u64 << (MAX_LENGTH - len)) - 2,
        31 => 2,
        32 => 1,
        _ => 0,
    }
}

/// Evaluate a subnet.
///
/// # Examples
/// ```
/// use netfun::models::parse_subnet;
/// use netfun::processing::evaluate;
/// let summary = evaluate(&parse_subnet("192.168.1.0/24").unwrap());
/// assert_eq!(summary.broadcast.to_string(), "192.168.1.255");
/// assert_eq!(summary.usable_host_count, 254);
/// ```
pub fn evaluate(subnet: &Subnet) -> SubnetSummary {
    let network = network_addr(subnet);
    let broadcast = broadcast_addr(subnet);
    let (first_host, last_host) = match subnet.prefix_len() {
        // No reserved addresses, the range is the whole block.
        31 | 32 => (network, broadcast),
        _ => (
            Ipv4Address::from_bits(network.to_bits() + 1),
            Ipv4Address::from_bits(broadcast.to_bits() - 1),
        ),
    };
    let summary = SubnetSummary {
        network,
        broadcast,
        first_host,
        last_host,
        usable_host_count: num_hosts(subnet.prefix_len()),
    };
    log::debug!("evaluate({subnet}) -> {summary:?}");
    summary
}
