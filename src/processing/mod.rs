//! Subnet processing logic.
//!
//! - [`subnet_eval`] - network, broadcast and host range of a CIDR block

mod subnet_eval;

// Re-export public functions
pub use subnet_eval::{broadcast_addr, evaluate, network_addr, num_hosts, SubnetSummary};
