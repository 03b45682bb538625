//! Network plan request as received from a client.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Container network plugin selecting the pod budget and conflict policy.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CniPlugin {
    #[serde(rename = "ovn-kubernetes")]
    OvnKubernetes,
    #[serde(rename = "openshift-sdn")]
    OpenshiftSdn,
}

impl CniPlugin {
    pub fn as_str(&self) -> &'static str {
        match self {
            CniPlugin::OvnKubernetes => "ovn-kubernetes",
            CniPlugin::OpenshiftSdn => "openshift-sdn",
        }
    }
}

impl fmt::Display for CniPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CniPlugin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ovn-kubernetes" | "ovnkubernetes" => Ok(CniPlugin::OvnKubernetes),
            "openshift-sdn" | "openshiftsdn" => Ok(CniPlugin::OpenshiftSdn),
            other => Err(format!(
                "unknown CNI plugin '{other}', expected ovn-kubernetes or openshift-sdn"
            )),
        }
    }
}

/// Absent, null and "" all mean no plugin was chosen.
fn deserialize_cni<'de, D>(deserializer: D) -> Result<Option<CniPlugin>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Input to the capacity planner.
///
/// Network fields stay as the strings the client sent so they can be echoed
/// back verbatim; the planner validates them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkPlanRequest {
    /// Prefix length of each node's pod subnet.
    pub host_prefix: u8,
    pub cluster_network: String,
    pub service_network: String,
    pub machine_network: String,
    #[serde(
        alias = "cniPlugin",
        deserialize_with = "deserialize_cni",
        skip_serializing_if = "Option::is_none"
    )]
    pub cni: Option<CniPlugin>,
}

impl NetworkPlanRequest {
    /// Names of required fields that were left empty (or zero for the prefix).
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.host_prefix == 0 {
            missing.push("hostPrefix");
        }
        if self.cluster_network.trim().is_empty() {
            missing.push("clusterNetwork");
        }
        if self.service_network.trim().is_empty() {
            missing.push("serviceNetwork");
        }
        if self.machine_network.trim().is_empty() {
            missing.push("machineNetwork");
        }
        missing
    }
}
