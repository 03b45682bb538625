//! Network plan response returned to the client.

use super::CniPlugin;
use serde::{Deserialize, Serialize};

/// Pods schedulable per node after plugin overhead.
///
/// A single number when a plugin was chosen, otherwise both budgets side by
/// side: `{"sdn": 509, "ovn": 508}`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum PodsPerNode {
    Single(u64),
    Dual { sdn: u64, ovn: u64 },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkPlanResponse {
    #[serde(rename = "pod-network")]
    pub pod_network: String,
    #[serde(rename = "service-network")]
    pub service_network: String,
    #[serde(rename = "machine-network")]
    pub machine_network: String,
    #[serde(rename = "cni", skip_serializing_if = "Option::is_none", default)]
    pub cni: Option<CniPlugin>,
    #[serde(rename = "number-of-pods")]
    pub num_pods: u64,
    #[serde(rename = "number-of-services")]
    pub num_services: u64,
    #[serde(rename = "number-of-nodes")]
    pub num_nodes: u64,
    /// Per-node share of the pod network before plugin overhead.
    #[serde(rename = "total-pods-per-node")]
    pub total_pods_per_node: u64,
    #[serde(rename = "pods-per-node")]
    pub pods_per_node: PodsPerNode,
    #[serde(rename = "machine-network-nodes")]
    pub machine_network_nodes: u64,
    #[serde(rename = "network-conflict")]
    pub conflict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(cni: Option<CniPlugin>, pods_per_node: PodsPerNode) -> NetworkPlanResponse {
        NetworkPlanResponse {
            pod_network: "10.128.0.0/14".to_string(),
            service_network: "172.30.0.0/16".to_string(),
            machine_network: "10.0.0.0/16".to_string(),
            cni,
            num_pods: 262142,
            num_services: 65534,
            num_nodes: 512,
            total_pods_per_node: 511,
            pods_per_node,
            machine_network_nodes: 65534,
            conflict: true,
        }
    }

    #[test]
    fn test_serialize_single_plugin() {
        let value =
            serde_json::to_value(sample(Some(CniPlugin::OpenshiftSdn), PodsPerNode::Single(509)))
                .unwrap();
        assert_eq!(
            value,
            json!({
                "pod-network": "10.128.0.0/14",
                "service-network": "172.30.0.0/16",
                "machine-network": "10.0.0.0/16",
                "cni": "openshift-sdn",
                "number-of-pods": 262142,
                "number-of-services": 65534,
                "number-of-nodes": 512,
                "total-pods-per-node": 511,
                "pods-per-node": 509,
                "machine-network-nodes": 65534,
                "network-conflict": true
            })
        );
    }

    #[test]
    fn test_serialize_dual_budget_omits_cni() {
        let value =
            serde_json::to_value(sample(None, PodsPerNode::Dual { sdn: 509, ovn: 508 })).unwrap();
        assert_eq!(value["pods-per-node"], json!({"sdn": 509, "ovn": 508}));
        assert!(value.get("cni").is_none());
    }

    #[test]
    fn test_deserialize_round_trips_pods_per_node_shape() {
        let parsed: PodsPerNode = serde_json::from_str(r#"{"sdn":1,"ovn":0}"#).unwrap();
        assert_eq!(parsed, PodsPerNode::Dual { sdn: 1, ovn: 0 });
        let parsed: PodsPerNode = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, PodsPerNode::Single(42));
    }
}
