//! Friendly labels and the per-octet lesson shown after an analysis.

use crate::models::{to_binary8, Ipv4Address};

/// Addresses cycled through by the showcase banner.
pub const SHOWCASE_ADDRESSES: [Ipv4Address; 4] = [
    Ipv4Address::new(192, 168, 1, 1),
    Ipv4Address::new(10, 0, 0, 1),
    Ipv4Address::new(172, 16, 0, 1),
    Ipv4Address::new(8, 8, 8, 8),
];

/// Plain-language label for the showcase banner.
///
/// Looser than [`classify`](super::classify): only `172.16.x.x` counts as a
/// corporate network here.
pub fn audience_label(addr: &Ipv4Address) -> &'static str {
    match addr.octets() {
        [192, 168, _, _] => "Home Network",
        [10, _, _, _] => "Private Network",
        [172, 16, _, _] => "Corporate Network",
        [8, 8, 8, 8] => "Google DNS",
        _ => "Public IP Address",
    }
}

/// One octet of an address explained in lesson form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctetRole {
    pub value: u8,
    pub binary: String,
    pub meaning: &'static str,
    /// Home-address analogy.
    pub analogy: &'static str,
}

const ROLES: [(&str, &str); 4] = [
    ("Network portion (identifies the network class)", "City"),
    ("Further network subdivision", "Street"),
    ("Usually identifies a subnet", "Block"),
    ("Host identifier (specific device)", "House #"),
];

/// Explain each octet of `addr`, most significant first.
pub fn lesson(addr: &Ipv4Address) -> [OctetRole; 4] {
    let octets = addr.octets();
    std::array::from_fn(|i| OctetRole {
        value: octets[i],
        binary: to_binary8(octets[i] as i64),
        meaning: ROLES[i].0,
        analogy: ROLES[i].1,
    })
}
