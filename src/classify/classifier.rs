//! Address class and category rules.

use crate::models::Ipv4Address;
use serde::Serialize;
use std::fmt;

/// Classful network band, decided by the first octet alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NetworkClass {
    A,
    B,
    C,
    /// Multicast band, 224-239.
    D,
    /// Experimental band, 240-255.
    E,
}

impl NetworkClass {
    /// Class for a first octet. 0 and 127 sit outside every band.
    pub fn from_first_octet(octet: u8) -> Option<NetworkClass> {
        match octet {
            1..=126 => Some(NetworkClass::A),
            128..=191 => Some(NetworkClass::B),
            192..=223 => Some(NetworkClass::C),
            224..=239 => Some(NetworkClass::D),
            240..=255 => Some(NetworkClass::E),
            0 | 127 => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NetworkClass::A => "A",
            NetworkClass::B => "B",
            NetworkClass::C => "C",
            NetworkClass::D => "D (Multicast)",
            NetworkClass::E => "E (Experimental)",
        }
    }
}

impl fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What kind of address this is, independent of its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Private,
    Loopback,
    NetworkId,
    Broadcast,
    Multicast,
    Public,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Private => "Private IP",
            Category::Loopback => "Loopback IP",
            Category::NetworkId => "Network ID",
            Category::Broadcast => "Broadcast IP",
            Category::Multicast => "Multicast IP",
            Category::Public => "Public IP",
        }
    }

    /// Fixed explanation shown next to the category.
    pub fn note(&self) -> &'static str {
        match self {
            Category::Loopback => "Used for testing (localhost)",
            Category::NetworkId => "Identifies the network itself",
            Category::Broadcast => "Sends to all devices in network",
            Category::Multicast => "Used for streaming to multiple devices",
            Category::Private | Category::Public => "Normal address",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Class, category and note for one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// `None` for first octets 0 and 127.
    pub class: Option<NetworkClass>,
    pub category: Category,
    pub note: &'static str,
}

impl ClassificationResult {
    /// Class label, or "Reserved" when the first octet has no class.
    pub fn class_label(&self) -> &'static str {
        self.class.map(|c| c.label()).unwrap_or("Reserved")
    }
}

/// Classify a validated address.
///
/// Category rules are tried in a fixed order and the first match wins:
/// private ranges, loopback, network ID (last octet 0), broadcast (last octet
/// 255), multicast, then public. So `10.0.0.0` is Private, not Network ID, and
/// `224.0.0.0` is Network ID, not Multicast.
pub fn classify(addr: &Ipv4Address) -> ClassificationResult {
    let category = category_of(addr);
    let result = ClassificationResult {
        class: NetworkClass::from_first_octet(addr.first_octet()),
        category,
        note: category.note(),
    };
    log::debug!("classify({addr}) -> {result:?}");
    result
}

fn category_of(addr: &Ipv4Address) -> Category {
    let [first, second, _, fourth] = addr.octets();
    if is_private(first, second) {
        Category::Private
    } else if first == 127 {
        Category::Loopback
    } else if fourth == 0 {
        Category::NetworkId
    } else if fourth == 255 {
        Category::Broadcast
    } else if (224..=239).contains(&first) {
        Category::Multicast
    } else {
        Category::Public
    }
}

fn is_private(first: u8, second: u8) -> bool {
    first == 10 || (first == 172 && (16..=31).contains(&second)) || (first == 192 && second == 168)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_address;

    fn classify_str(s: &str) -> ClassificationResult {
        classify(&parse_address(s).unwrap())
    }

    #[test]
    fn test_class_bands() {
        assert_eq!(NetworkClass::from_first_octet(0), None);
        assert_eq!(NetworkClass::from_first_octet(1), Some(NetworkClass::A));
        assert_eq!(NetworkClass::from_first_octet(126), Some(NetworkClass::A));
        assert_eq!(NetworkClass::from_first_octet(127), None);
        assert_eq!(NetworkClass::from_first_octet(128), Some(NetworkClass::B));
        assert_eq!(NetworkClass::from_first_octet(191), Some(NetworkClass::B));
        assert_eq!(NetworkClass::from_first_octet(192), Some(NetworkClass::C));
        assert_eq!(NetworkClass::from_first_octet(223), Some(NetworkClass::C));
        assert_eq!(NetworkClass::from_first_octet(224), Some(NetworkClass::D));
        assert_eq!(NetworkClass::from_first_octet(239), Some(NetworkClass::D));
        assert_eq!(NetworkClass::from_first_octet(240), Some(NetworkClass::E));
        assert_eq!(NetworkClass::from_first_octet(255), Some(NetworkClass::E));
    }

    #[test]
    fn test_private_class_c() {
        let r = classify_str("192.168.1.1");
        assert_eq!(r.category, Category::Private);
        assert_eq!(r.class, Some(NetworkClass::C));
        assert_eq!(r.note, "Normal address");
    }

    #[test]
    fn test_loopback() {
        let r = classify_str("127.0.0.1");
        assert_eq!(r.category, Category::Loopback);
        assert_eq!(r.class, None);
        assert_eq!(r.class_label(), "Reserved");
        assert_eq!(r.note, "Used for testing (localhost)");
        // Loopback is checked before network ID and broadcast.
        assert_eq!(classify_str("127.0.0.0").category, Category::Loopback);
        assert_eq!(classify_str("127.255.255.255").category, Category::Loopback);
    }

    #[test]
    fn test_private_wins_over_network_id() {
        let r = classify_str("10.0.0.0");
        assert_eq!(r.category, Category::Private);
        assert_eq!(r.class, Some(NetworkClass::A));
        assert_eq!(classify_str("192.168.1.255").category, Category::Private);
    }

    #[test]
    fn test_private_172_range_edges() {
        assert_eq!(classify_str("172.15.0.1").category, Category::Public);
        assert_eq!(classify_str("172.16.0.1").category, Category::Private);
        assert_eq!(classify_str("172.31.255.1").category, Category::Private);
        assert_eq!(classify_str("172.32.0.1").category, Category::Public);
        assert_eq!(classify_str("192.169.0.1").category, Category::Public);
    }

    #[test]
    fn test_network_id_and_broadcast() {
        let r = classify_str("8.8.8.0");
        assert_eq!(r.category, Category::NetworkId);
        assert_eq!(r.note, "Identifies the network itself");
        let r = classify_str("8.8.8.255");
        assert_eq!(r.category, Category::Broadcast);
        assert_eq!(r.note, "Sends to all devices in network");
    }

    #[test]
    fn test_multicast_after_network_id_and_broadcast() {
        let r = classify_str("224.0.0.1");
        assert_eq!(r.category, Category::Multicast);
        assert_eq!(r.class, Some(NetworkClass::D));
        assert_eq!(r.class_label(), "D (Multicast)");
        assert_eq!(classify_str("224.0.0.0").category, Category::NetworkId);
        assert_eq!(classify_str("239.1.1.255").category, Category::Broadcast);
    }

    #[test]
    fn test_public_and_experimental() {
        let r = classify_str("8.8.8.8");
        assert_eq!(r.category, Category::Public);
        assert_eq!(r.class, Some(NetworkClass::A));
        let r = classify_str("250.1.2.3");
        assert_eq!(r.category, Category::Public);
        assert_eq!(r.class_label(), "E (Experimental)");
    }

    #[test]
    fn test_zero_first_octet_is_unclassified() {
        let r = classify_str("0.0.0.0");
        assert_eq!(r.class, None);
        assert_eq!(r.category, Category::NetworkId);
        assert_eq!(classify_str("0.1.2.3").category, Category::Public);
    }

    #[test]
    fn test_classify_total_and_deterministic() {
        for first in 0..=u8::MAX {
            for fourth in [0u8, 1, 254, 255] {
                let addr = Ipv4Address::new(first, 20, 30, fourth);
                let r = classify(&addr);
                assert_eq!(r, classify(&addr));
                assert_eq!(r.note, r.category.note());
            }
        }
    }
}
