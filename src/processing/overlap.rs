//! Network conflict detection.
//!
//! Two networks conflict when either one contains the other's network
//! address. CIDR blocks are aligned, so two blocks are either nested or
//! disjoint and this containment test catches every shared address.

use crate::models::Ipv4;
use itertools::Itertools;
use std::fmt;

/// A network tagged with the role it plays in the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledNetwork {
    pub label: String,
    pub network: Ipv4,
}

impl LabelledNetwork {
    pub fn new(label: impl Into<String>, network: Ipv4) -> Self {
        LabelledNetwork {
            label: label.into(),
            network,
        }
    }
}

impl fmt::Display for LabelledNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.network)
    }
}

/// A pair of networks whose address ranges collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapConflict {
    pub first: LabelledNetwork,
    pub second: LabelledNetwork,
}

impl fmt::Display for OverlapConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} overlaps {}", self.first, self.second)
    }
}

fn overlaps(a: &Ipv4, b: &Ipv4) -> bool {
    a.contains(b.lo()) || b.contains(a.lo())
}

/// True if any two networks in the list overlap.
pub fn has_conflict(networks: &[Ipv4]) -> bool {
    networks.iter().enumerate().any(|(i, a)| {
        networks
            .iter()
            .enumerate()
            .any(|(j, b)| i != j && overlaps(a, b))
    })
}

/// Every unordered pair of overlapping networks, in input order.
pub fn find_conflicts(networks: &[LabelledNetwork]) -> Vec<OverlapConflict> {
    networks
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| overlaps(&a.network, &b.network))
        .map(|(a, b)| OverlapConflict {
            first: a.clone(),
            second: b.clone(),
        })
        .collect()
}

/// Log conflicts as warnings.
pub fn log_conflicts(conflicts: &[OverlapConflict]) {
    if conflicts.is_empty() {
        log::debug!("No overlapping networks found.");
        return;
    }

    log::warn!("Found {} overlapping network pair(s):", conflicts.len());
    for conflict in conflicts {
        log::warn!("  - {conflict}");
    }
}
