//! CIDR block parsing and mask arithmetic.
//!
//! Provides [`Subnet`] for `address/prefix` notation, along with the mask
//! helpers the subnet evaluator builds on.

use super::ipv4::{parse_octets, Ipv4Address};
use crate::error::AddressError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Returns `None` when the prefix is longer than [`MAX_LENGTH`].
///
/// # Examples
/// ```
/// use netfun::models::cidr_mask;
/// assert_eq!(cidr_mask(24), Some(0xFFFFFF00));
/// assert_eq!(cidr_mask(33), None);
/// ```
pub fn cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        None
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;
        // Shift in u64 so /0 does not overflow.
        let mask = (all_bits >> right_len) << right_len;
        Some(mask as u32)
    }
}

/// Parse an `address/prefix` string.
///
/// The whole string is trimmed once. The address follows the same grammar as
/// [`parse_address`](super::parse_address) and the prefix must be a decimal
/// integer in `0..=32`.
pub fn parse_subnet(text: &str) -> Result<Subnet, AddressError> {
    let text = text.trim();
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 2 {
        log::debug!("parse_subnet({text}) wrong separator count");
        return Err(AddressError::invalid(text));
    }
    let octets = parse_octets(parts[0]).ok_or_else(|| AddressError::invalid(text))?;
    let prefix_len = parse_prefix(parts[1]).ok_or_else(|| AddressError::invalid(text))?;
    Ok(Subnet {
        base: Ipv4Address::from(octets),
        prefix_len,
    })
}

fn parse_prefix(text: &str) -> Option<u8> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let len: u8 = text.parse().ok()?;
    (len <= MAX_LENGTH).then_some(len)
}

/// An address together with a prefix length in `0..=32`.
///
/// The base address is kept as entered; network, broadcast and host range
/// are derived on demand by [`crate::processing::evaluate`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    base: Ipv4Address,
    prefix_len: u8,
}

impl Subnet {
    pub fn new(base: Ipv4Address, prefix_len: u8) -> Result<Subnet, AddressError> {
        if prefix_len > MAX_LENGTH {
            return Err(AddressError::InvalidFormat(format!("{base}/{prefix_len}")));
        }
        Ok(Subnet { base, prefix_len })
    }

    pub fn base(&self) -> Ipv4Address {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Subnet mask for this prefix.
    pub fn mask(&self) -> u32 {
        // prefix_len is checked on construction
        cidr_mask(self.prefix_len).unwrap_or(u32::MAX)
    }
}

impl FromStr for Subnet {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_subnet(s)
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_len)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_subnet(&s).map_err(|_| de::Error::custom(format!("invalid CIDR format: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_mask() {
        assert_eq!(cidr_mask(0), Some(0x00000000));
        assert_eq!(cidr_mask(8), Some(0xFF000000));
        assert_eq!(cidr_mask(16), Some(0xFFFF0000));
        assert_eq!(cidr_mask(24), Some(0xFFFFFF00));
        assert_eq!(cidr_mask(31), Some(0xFFFFFFFE));
        assert_eq!(cidr_mask(32), Some(0xFFFFFFFF));
        assert_eq!(cidr_mask(33), None);
    }

    #[test]
    fn test_parse_subnet() {
        let subnet = parse_subnet("192.168.1.0/24").unwrap();
        assert_eq!(subnet.base(), Ipv4Address::new(192, 168, 1, 0));
        assert_eq!(subnet.prefix_len(), 24);
        assert_eq!(subnet.mask(), 0xFFFFFF00);

        let subnet = parse_subnet(" 10.1.2.3/0 ").unwrap();
        assert_eq!(subnet.prefix_len(), 0);
        assert_eq!(subnet.mask(), 0);

        assert_eq!(parse_subnet("1.2.3.4/32").unwrap().prefix_len(), 32);
    }

    #[test]
    fn test_parse_subnet_keeps_host_bits() {
        let subnet = parse_subnet("10.2.3.4/16").unwrap();
        assert_eq!(subnet.base(), Ipv4Address::new(10, 2, 3, 4));
        assert_eq!(subnet.to_string(), "10.2.3.4/16");
    }

    #[test]
    fn test_parse_subnet_invalid() {
        for bad in [
            "192.168.1.0",
            "192.168.1.0/",
            "/24",
            "192.168.1.0/33",
            "192.168.1.0/24/8",
            "192.168.1.0\\24",
            "192.168.1/24",
            "256.168.1.0/24",
            "192.168.1.0/-1",
            "192.168.1.0/+8",
            "192.168.1.0/008",
            "192.168.1.0 /24",
            "192.168.1.0/ 24",
            "192.168.1.0/a",
        ] {
            assert_eq!(
                parse_subnet(bad),
                Err(AddressError::InvalidFormat(bad.to_string())),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_subnet_new_rejects_long_prefix() {
        let base = Ipv4Address::new(10, 0, 0, 0);
        assert!(Subnet::new(base, 32).is_ok());
        assert_eq!(
            Subnet::new(base, 40),
            Err(AddressError::InvalidFormat("10.0.0.0/40".to_string()))
        );
    }

    #[test]
    fn test_subnet_cmp() {
        let a = parse_subnet("10.0.0.0/8").unwrap();
        let b = parse_subnet("10.0.10.0/24").unwrap();
        assert!(a < b);
        assert_eq!(a, "10.0.0.0/8".parse::<Subnet>().unwrap());
    }
}
