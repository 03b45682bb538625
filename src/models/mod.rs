//! Domain models for the network plan calculator.
//!
//! This module contains the value types passed through the engine:
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`NetworkPlanRequest`] and [`CniPlugin`] - what the client asks for
//! - [`NetworkPlanResponse`] and [`PodsPerNode`] - what the planner reports

mod ipv4;
mod request;
mod response;

// Re-export public types
pub use ipv4::{Ipv4, MAX_LENGTH};
pub use request::{CniPlugin, NetworkPlanRequest};
pub use response::{NetworkPlanResponse, PodsPerNode};
