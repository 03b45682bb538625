//! Equal-size subnet partitioning of a network.
//!
//! Counting is all the planner needs; [`nth_subnet`] and [`node_subnets`]
//! materialise individual node subnets for previews.

use crate::error::{EngineError, Result};
use crate::models::{Ipv4, MAX_LENGTH};
use std::net::Ipv4Addr;

fn invalid_partition(network: &Ipv4, target: u8, reason: impl Into<String>) -> EngineError {
    EngineError::InvalidPartition {
        network: network.to_string(),
        target,
        reason: reason.into(),
    }
}

/// How many `/target` subnets fit inside `network`: `2^(target - prefix)`.
pub fn count_subnets(network: &Ipv4, target: u8) -> Result<u64> {
    if target > MAX_LENGTH {
        return Err(invalid_partition(
            network,
            target,
            "target prefix length is longer than 32",
        ));
    }
    if target <= network.mask {
        return Err(invalid_partition(
            network,
            target,
            format!(
                "target prefix length must be greater than the network prefix /{}",
                network.mask
            ),
        ));
    }
    Ok(1u64 << (target - network.mask))
}

/// Base address of the `n`-th `/target` subnet of `network` (0-based).
///
/// Uses whole-address arithmetic so carries cross octet boundaries.
pub fn nth_subnet(network: &Ipv4, target: u8, n: u64) -> Result<Ipv4> {
    let count = count_subnets(network, target)?;
    if n >= count {
        return Err(invalid_partition(
            network,
            target,
            format!("subnet index {n} is outside 0..{count}"),
        ));
    }

    let step = 1u64 << (MAX_LENGTH - target);
    let base = u64::from(u32::from(network.lo()));
    let addr_bits = n
        .checked_mul(step)
        .and_then(|offset| base.checked_add(offset))
        .and_then(|bits| u32::try_from(bits).ok())
        .ok_or_else(|| {
            EngineError::ArithmeticOverflow(format!(
                "subnet {n} of {network} at /{target} is past 255.255.255.255"
            ))
        })?;

    Ok(Ipv4 {
        addr: Ipv4Addr::from(addr_bits),
        mask: target,
    })
}

/// Lazy iterator over every `/target` subnet of a network, in address order.
#[derive(Debug, Clone)]
pub struct NodeSubnets {
    network: Ipv4,
    target: u8,
    next: u64,
    count: u64,
}

impl Iterator for NodeSubnets {
    type Item = Ipv4;

    fn next(&mut self) -> Option<Ipv4> {
        if self.next >= self.count {
            return None;
        }
        let subnet = nth_subnet(&self.network, self.target, self.next).ok()?;
        self.next += 1;
        Some(subnet)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

pub fn node_subnets(network: &Ipv4, target: u8) -> Result<NodeSubnets> {
    let count = count_subnets(network, target)?;
    Ok(NodeSubnets {
        network: network.network(),
        target,
        next: 0,
        count,
    })
}
