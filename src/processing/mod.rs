//! Network plan engine.
//!
//! This module contains the CIDR arithmetic the planner is built from:
//! - [`validator`] - CIDR parsing and validation
//! - [`counter`] - usable address counts
//! - [`partition`] - equal-size subnet partitioning
//! - [`overlap`] - conflict detection between networks

mod counter;
mod overlap;
mod partition;
mod validator;

// Re-export public functions
pub use counter::usable_addresses;
pub use overlap::{find_conflicts, has_conflict, log_conflicts, LabelledNetwork, OverlapConflict};
pub use partition::{count_subnets, node_subnets, nth_subnet, NodeSubnets};
pub use validator::validate;
