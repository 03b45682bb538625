//! Usable address counting.

use crate::models::Ipv4;

/// Addresses reserved per network: the network and broadcast addresses.
const RESERVED_ADDRESSES: u64 = 2;

/// Number of usable host addresses in `network`: `2^(32 - prefix) - 2`.
///
/// /31 and /32 would give 0 and -1; both clamp to zero.
pub fn usable_addresses(network: &Ipv4) -> u64 {
    network.size().saturating_sub(RESERVED_ADDRESSES)
}
