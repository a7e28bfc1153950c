//! Eight-bit decimal/binary conversion.
//!
//! [`BitVector8`] keeps a byte and its binary string in lockstep, and the
//! free functions cover one-off conversions.

use regex::Regex;
use std::sync::OnceLock;

/// Number of bits shown by the converter.
pub const BIT_WIDTH: u8 = 8;

/// Leading integer of a text field, the way a browser number box reads it.
static DECIMAL_PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_decimal_prefix_regex() -> &'static Regex {
    DECIMAL_PREFIX_REGEX
        .get_or_init(|| Regex::new(r"^([+-]?)([0-9]+)").expect("Invalid Regex"))
}

/// Clamp any integer into `0..=255`.
pub fn clamp_octet(n: i64) -> u8 {
    n.clamp(0, u8::MAX as i64) as u8
}

/// Read a decimal from user text and clamp it into `0..=255`.
///
/// Only the leading integer counts (`"12px"` is 12). Text without a leading
/// integer reads as 0, negatives clamp to 0 and anything above 255 (including
/// numbers too long for an i64) clamps to 255.
pub fn parse_decimal_input(text: &str) -> u8 {
    let text = text.trim();
    let Some(caps) = get_decimal_prefix_regex().captures(text) else {
        log::debug!("parse_decimal_input({text:?}) not numeric, using 0");
        return 0;
    };
    let negative = &caps[1] == "-";
    match caps[2].parse::<i64>() {
        Ok(n) if negative => clamp_octet(-n),
        Ok(n) => clamp_octet(n),
        Err(_) if negative => 0,
        Err(_) => u8::MAX,
    }
}

/// Most-significant-bit-first, zero padded binary form of `n` after clamping.
///
/// # Examples
/// ```
/// use netfun::models::to_binary8;
/// assert_eq!(to_binary8(5), "00000101");
/// assert_eq!(to_binary8(-3), "00000000");
/// assert_eq!(to_binary8(900), "11111111");
/// ```
pub fn to_binary8(n: i64) -> String {
    format!("{:08b}", clamp_octet(n))
}

/// [`to_binary8`] for raw text input.
pub fn to_binary8_text(text: &str) -> String {
    format!("{:08b}", parse_decimal_input(text))
}

/// Read an 8-character `0`/`1` string back into a byte.
pub fn from_binary8(bits: &str) -> Option<u8> {
    if bits.len() != BIT_WIDTH as usize || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(bits, 2).ok()
}

/// Place value of a bit position; index 0 is the 128 bit, index 7 the 1 bit.
pub fn bit_weight(bit_index: u8) -> Option<u8> {
    (bit_index < BIT_WIDTH).then(|| 0x80 >> bit_index)
}

/// Toggle one bit, addressed most-significant first.
///
/// An index outside `0..=7` leaves the value unchanged.
pub fn flip_bit(value: u8, bit_index: u8) -> u8 {
    match bit_weight(bit_index) {
        Some(weight) => value ^ weight,
        None => {
            log::warn!("flip_bit: bit index {bit_index} out of range, value unchanged");
            value
        }
    }
}

/// A byte and its binary string, always consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVector8 {
    value: u8,
    bits: String,
}

impl BitVector8 {
    pub fn new(value: u8) -> Self {
        BitVector8 {
            value,
            bits: format!("{value:08b}"),
        }
    }

    /// Build from user text, with the same clamping as the converter input.
    pub fn from_input(text: &str) -> Self {
        BitVector8::new(parse_decimal_input(text))
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn bits(&self) -> &str {
        &self.bits
    }

    /// Whether the bit at `bit_index` (MSB first) is set.
    pub fn is_set(&self, bit_index: u8) -> bool {
        bit_weight(bit_index).is_some_and(|w| self.value & w != 0)
    }

    /// Toggle one bit and re-derive the string form.
    pub fn flip(&mut self, bit_index: u8) {
        self.set_value(flip_bit(self.value, bit_index));
    }

    pub fn set_value(&mut self, value: u8) {
        self.value = value;
        self.bits = format!("{value:08b}");
    }

    /// `(bit_index, weight, set)` for each position, MSB first.
    pub fn positions(&self) -> impl Iterator<Item = (u8, u8, bool)> + '_ {
        (0..BIT_WIDTH).map(move |i| (i, 0x80 >> i, self.is_set(i)))
    }
}

impl Default for BitVector8 {
    fn default() -> Self {
        BitVector8::new(0)
    }
}

impl std::fmt::Display for BitVector8 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.bits)
    }
}
