//! Typed failures raised by the network plan engine.
//!
//! Every error is deterministic: the same input always yields the same error,
//! so callers surface it instead of retrying.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed network string or out-of-range prefix length.
    #[error("Invalid network CIDR: {cidr} ({reason})")]
    InvalidCidr { cidr: String, reason: String },

    /// Target prefix not strictly greater than the network prefix, above 32,
    /// or a subnet index outside the partition.
    #[error("Invalid partition of {network} into /{target}: {reason}")]
    InvalidPartition {
        network: String,
        target: u8,
        reason: String,
    },

    #[error("Number of nodes is 0 for cluster network {cluster_network} with host prefix /{host_prefix}")]
    ZeroNodes {
        cluster_network: String,
        host_prefix: u8,
    },

    /// Subnet base address ran past 255.255.255.255.
    #[error("Address arithmetic overflowed: {0}")]
    ArithmeticOverflow(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub fn invalid_cidr(cidr: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::InvalidCidr {
            cidr: cidr.into(),
            reason: reason.into(),
        }
    }
}
