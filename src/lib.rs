//! Capacity and conflict calculator for OpenShift cluster network plans.
//!
//! Given a cluster (pod) network, service network, machine network, host
//! prefix and CNI plugin, [`plan_network`] reports how many pods, services
//! and nodes the plan supports and whether any of the networks overlap.

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod planner;
pub mod processing;
pub mod server;

pub use error::EngineError;
pub use models::{CniPlugin, Ipv4, NetworkPlanRequest, NetworkPlanResponse, PodsPerNode};
pub use planner::{
    plan_network, plan_network_with_conflicts, NetworkPlan, JOIN_SWITCH_NETWORK,
    TRANSIT_SWITCH_NETWORK,
};
