//! NetFun: an IPv4 teaching toolkit.
//!
//! The core is pure and stateless:
//! - [`models`] - address, subnet and byte parsing
//! - [`classify`] - class, category and lesson text for an address
//! - [`processing`] - network, broadcast and host range of a subnet
//!
//! Around it sit the learner-facing pieces: [`session`] progress,
//! [`games`], terminal [`output`] and the [`command`] dispatcher.

pub mod classify;
pub mod command;
pub mod config;
pub mod error;
pub mod games;
pub mod models;
pub mod output;
pub mod processing;
pub mod session;

pub use classify::{classify, ClassificationResult};
pub use error::AddressError;
pub use models::{flip_bit, parse_address, parse_subnet, to_binary8, Ipv4Address, Subnet};
pub use processing::{evaluate, SubnetSummary};
