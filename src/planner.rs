//! Capacity planner.
//!
//! Composes validation, counting, partitioning and conflict detection into a
//! full [`NetworkPlanResponse`] for one [`NetworkPlanRequest`].

use crate::error::{EngineError, Result};
use crate::models::{CniPlugin, Ipv4, NetworkPlanRequest, NetworkPlanResponse, PodsPerNode};
use crate::processing::{
    count_subnets, find_conflicts, log_conflicts, usable_addresses, validate, LabelledNetwork,
    OverlapConflict,
};

/// OVN-Kubernetes join switch network, reserved on every cluster.
pub const JOIN_SWITCH_NETWORK: &str = "100.64.0.0/16";
/// OVN-Kubernetes transit switch network, reserved on every cluster.
pub const TRANSIT_SWITCH_NETWORK: &str = "100.88.0.0/16";

/// Addresses OVN-Kubernetes takes from each node subnet (management port and gateways).
const OVN_NODE_OVERHEAD: u64 = 3;
/// Addresses OpenShift SDN takes from each node subnet.
const SDN_NODE_OVERHEAD: u64 = 2;

impl CniPlugin {
    /// Addresses the plugin keeps back from each node's pod subnet.
    pub fn node_overhead(&self) -> u64 {
        match self {
            CniPlugin::OvnKubernetes => OVN_NODE_OVERHEAD,
            CniPlugin::OpenshiftSdn => SDN_NODE_OVERHEAD,
        }
    }

    /// Pods a node can run once the plugin overhead is taken out.
    pub fn pod_budget(&self, total_pods_per_node: u64) -> u64 {
        total_pods_per_node.saturating_sub(self.node_overhead())
    }

    /// Internal ranges the plugin claims that must not collide with the plan.
    pub fn reserved_networks(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            CniPlugin::OvnKubernetes => &[
                ("joinSwitchNetwork", JOIN_SWITCH_NETWORK),
                ("transitSwitchNetwork", TRANSIT_SWITCH_NETWORK),
            ],
            CniPlugin::OpenshiftSdn => &[],
        }
    }
}

/// A finished plan together with the overlapping pairs behind its conflict flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkPlan {
    pub response: NetworkPlanResponse,
    pub conflicts: Vec<OverlapConflict>,
}

/// Compute the capacity report for a network plan.
pub fn plan_network(request: &NetworkPlanRequest) -> Result<NetworkPlanResponse> {
    plan_network_with_conflicts(request).map(|plan| plan.response)
}

/// Like [`plan_network`], also returning which networks overlap.
pub fn plan_network_with_conflicts(request: &NetworkPlanRequest) -> Result<NetworkPlan> {
    log::debug!("plan_network({request:?})");

    let cluster_network = validate(&request.cluster_network)?;
    let service_network = validate(&request.service_network)?;
    let machine_network = validate(&request.machine_network)?;

    let num_pods = usable_addresses(&cluster_network);
    let num_nodes = count_subnets(&cluster_network, request.host_prefix)?;
    if num_nodes == 0 {
        return Err(EngineError::ZeroNodes {
            cluster_network: request.cluster_network.clone(),
            host_prefix: request.host_prefix,
        });
    }
    let total_pods_per_node = num_pods / num_nodes;

    let pods_per_node = match request.cni {
        Some(cni) => PodsPerNode::Single(cni.pod_budget(total_pods_per_node)),
        None => PodsPerNode::Dual {
            sdn: CniPlugin::OpenshiftSdn.pod_budget(total_pods_per_node),
            ovn: CniPlugin::OvnKubernetes.pod_budget(total_pods_per_node),
        },
    };

    let num_services = usable_addresses(&service_network);
    let machine_network_nodes = usable_addresses(&machine_network);

    let mut networks = vec![
        LabelledNetwork::new("clusterNetwork", cluster_network),
        LabelledNetwork::new("serviceNetwork", service_network),
        LabelledNetwork::new("machineNetwork", machine_network),
    ];
    if let Some(cni) = request.cni {
        for (label, cidr) in cni.reserved_networks() {
            networks.push(LabelledNetwork::new(*label, Ipv4::new(cidr)?));
        }
    }
    let conflicts = find_conflicts(&networks);
    log_conflicts(&conflicts);

    let response = NetworkPlanResponse {
        pod_network: request.cluster_network.clone(),
        service_network: request.service_network.clone(),
        machine_network: request.machine_network.clone(),
        cni: request.cni,
        num_pods,
        num_services,
        num_nodes,
        total_pods_per_node,
        pods_per_node,
        machine_network_nodes,
        conflict: !conflicts.is_empty(),
    };
    log::info!(
        "Planned {} nodes x {:?} pods for {} (cni={}, conflict={})",
        response.num_nodes,
        response.pods_per_node,
        response.pod_network,
        request.cni.map_or("unspecified", |c| c.as_str()),
        response.conflict
    );

    Ok(NetworkPlan {
        response,
        conflicts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(cluster: &str, host_prefix: u8, cni: Option<CniPlugin>) -> NetworkPlanRequest {
        NetworkPlanRequest {
            host_prefix,
            cluster_network: cluster.to_string(),
            service_network: "172.30.0.0/16".to_string(),
            machine_network: "10.0.0.0/16".to_string(),
            cni,
        }
    }

    #[test]
    fn test_sdn_plan() {
        let resp = plan_network(&request("10.128.0.0/14", 23, Some(CniPlugin::OpenshiftSdn)))
            .unwrap();
        assert_eq!(resp.num_pods, 262142);
        assert_eq!(resp.num_nodes, 512);
        assert_eq!(resp.total_pods_per_node, 511);
        assert_eq!(resp.pods_per_node, PodsPerNode::Single(509));
        assert_eq!(resp.num_services, 65534);
        assert_eq!(resp.machine_network_nodes, 65534);
        assert_eq!(resp.cni, Some(CniPlugin::OpenshiftSdn));
    }

    #[test]
    fn test_ovn_budget_is_one_less_than_sdn() {
        let sdn = plan_network(&request("10.128.0.0/14", 23, Some(CniPlugin::OpenshiftSdn)))
            .unwrap();
        let ovn = plan_network(&request("10.128.0.0/14", 23, Some(CniPlugin::OvnKubernetes)))
            .unwrap();
        match (sdn.pods_per_node, ovn.pods_per_node) {
            (PodsPerNode::Single(s), PodsPerNode::Single(o)) => assert_eq!(s - o, 1),
            other => panic!("unexpected budgets {other:?}"),
        }
    }

    #[test]
    fn test_unspecified_cni_reports_both_budgets() {
        let resp = plan_network(&request("10.128.0.0/14", 23, None)).unwrap();
        assert_eq!(resp.pods_per_node, PodsPerNode::Dual { sdn: 509, ovn: 508 });
        assert_eq!(resp.cni, None);
    }

    #[test]
    fn test_host_prefix_not_longer_than_cluster_prefix() {
        for host_prefix in [0, 10, 14] {
            let err = plan_network(&request("10.128.0.0/14", host_prefix, None)).unwrap_err();
            assert!(matches!(err, EngineError::InvalidPartition { .. }));
        }
    }

    #[test]
    fn test_invalid_machine_network_rejected() {
        let mut req = request("10.128.0.0/14", 23, None);
        req.machine_network = "10.0.0.0/99".to_string();
        let err = plan_network(&req).unwrap_err();
        assert!(matches!(err, EngineError::InvalidCidr { ref cidr, .. } if cidr == "10.0.0.0/99"));
    }

    #[test]
    fn test_tiny_node_subnets_saturate_at_zero() {
        let resp = plan_network(&request("10.1.0.0/30", 32, Some(CniPlugin::OvnKubernetes)))
            .unwrap();
        assert_eq!(resp.num_pods, 2);
        assert_eq!(resp.num_nodes, 4);
        assert_eq!(resp.total_pods_per_node, 0);
        assert_eq!(resp.pods_per_node, PodsPerNode::Single(0));
    }

    #[test]
    fn test_ovn_checks_join_and_transit_switch() {
        let cluster = "100.64.0.0/14";
        let sdn = plan_network(&request(cluster, 23, Some(CniPlugin::OpenshiftSdn))).unwrap();
        let ovn =
            plan_network_with_conflicts(&request(cluster, 23, Some(CniPlugin::OvnKubernetes)))
                .unwrap();
        assert!(!sdn.conflict);
        assert!(ovn.response.conflict);
        assert_eq!(ovn.conflicts.len(), 1);
        assert_eq!(ovn.conflicts[0].second.label, "joinSwitchNetwork");

        let transit = "100.88.0.0/16";
        let mut req = request("10.128.0.0/14", 23, Some(CniPlugin::OvnKubernetes));
        req.machine_network = transit.to_string();
        let plan = plan_network_with_conflicts(&req).unwrap();
        assert!(plan.response.conflict);
        assert_eq!(plan.conflicts[0].second.label, "transitSwitchNetwork");
    }

    #[test]
    fn test_reserved_ranges_only_checked_for_ovn() {
        assert!(CniPlugin::OpenshiftSdn.reserved_networks().is_empty());
        assert_eq!(CniPlugin::OvnKubernetes.reserved_networks().len(), 2);
        let resp = plan_network(&request("100.64.0.0/14", 23, None)).unwrap();
        assert!(!resp.conflict);
    }

    #[test]
    fn test_echoes_inputs_verbatim() {
        let resp = plan_network(&request("10.128.0.0/14", 23, None)).unwrap();
        assert_eq!(resp.pod_network, "10.128.0.0/14");
        assert_eq!(resp.service_network, "172.30.0.0/16");
        assert_eq!(resp.machine_network, "10.0.0.0/16");
    }

    #[test]
    fn test_padded_or_zero_led_networks_rejected() {
        for cluster in ["010.128.0.0/14", "\t10.128.0.0/14\n", " 10.128.0.0/14"] {
            let err = plan_network(&request(cluster, 23, None)).unwrap_err();
            assert!(
                matches!(err, EngineError::InvalidCidr { ref cidr, .. } if cidr == cluster),
                "{cluster:?} should be rejected"
            );
        }
    }
}
