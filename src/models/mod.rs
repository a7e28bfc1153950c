//! Domain models for the NetFun toolkit.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4Address`] - validated dotted-quad address
//! - [`Subnet`] - address with a CIDR prefix length
//! - [`BitVector8`] - a byte kept in sync with its binary string

mod bits;
mod ipv4;
mod subnet;

// Re-export public types
pub use bits::{
    bit_weight, clamp_octet, flip_bit, from_binary8, parse_decimal_input, to_binary8,
    to_binary8_text, BitVector8, BIT_WIDTH,
};
pub use ipv4::{parse_address, Ipv4Address};
pub use subnet::{cidr_mask, parse_subnet, Subnet, MAX_LENGTH};
