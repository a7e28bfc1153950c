//! Error type for address and subnet parsing.

use thiserror::Error;

/// Failure raised when user text is not a valid dotted quad or CIDR block.
///
/// The offending input is kept (already trimmed) so the presentation layer
/// can echo it back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid format: {0:?}")]
    InvalidFormat(String),
}

impl AddressError {
    pub(crate) fn invalid(input: &str) -> Self {
        AddressError::InvalidFormat(input.to_string())
    }
}
