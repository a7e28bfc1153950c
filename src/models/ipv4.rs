//! Dotted-quad IPv4 address parsing.
//!
//! Provides [`Ipv4Address`], a validated address that can only be built from
//! well-formed input, and [`parse_address`] for turning user text into one.

use crate::error::AddressError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Four groups of one to three ASCII digits. `\d` would also accept
/// non-ASCII digits, hence the explicit class.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex")
    })
}

/// Parse a dotted-quad address.
///
/// The input is trimmed once; after that it must be exactly four
/// dot-separated groups of 1-3 digits, each in `0..=255`.
///
/// # Examples
/// ```
/// use netfun::models::parse_address;
/// let addr = parse_address(" 192.168.1.1 ").unwrap();
/// assert_eq!(addr.octets(), [192, 168, 1, 1]);
/// assert!(parse_address("256.1.1.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Address, AddressError> {
    let text = text.trim();
    parse_octets(text)
        .map(Ipv4Address::from)
        .ok_or_else(|| AddressError::invalid(text))
}

/// Match an already trimmed string against the dotted-quad grammar.
pub(crate) fn parse_octets(text: &str) -> Option<[u8; 4]> {
    let caps = get_dotted_quad_regex().captures(text)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        // At most three digits, so this cannot overflow a u16.
        let value: u16 = caps[i + 1].parse().ok()?;
        *octet = u8::try_from(value).ok()?;
    }
    log::trace!("parse_octets({text}) -> {octets:?}");
    Some(octets)
}

/// A validated IPv4 address.
///
/// Every octet is in `0..=255` by construction; invalid text never produces
/// an instance.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Address {
    addr: Ipv4Addr,
}

impl Ipv4Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Ipv4Address {
            addr: Ipv4Addr::new(a, b, c, d),
        }
    }

    /// The four octets, most significant first.
    pub fn octets(&self) -> [u8; 4] {
        self.addr.octets()
    }

    pub fn first_octet(&self) -> u8 {
        self.octets()[0]
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn to_bits(&self) -> u32 {
        u32::from(self.addr)
    }

    pub fn from_bits(bits: u32) -> Self {
        Ipv4Address {
            addr: Ipv4Addr::from(bits),
        }
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address { addr }
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(octets: [u8; 4]) -> Self {
        Ipv4Address {
            addr: Ipv4Addr::from(octets),
        }
    }
}

impl FromStr for Ipv4Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl std::fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.addr)
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_address(&s).map_err(|_| de::Error::custom(format!("invalid IP address: {}", s)))
    }
}
