//! Terminal output utilities.
//!
//! Renders a [`NetworkPlan`] as an aligned key/value table.

use crate::models::{Ipv4, PodsPerNode};
use crate::planner::NetworkPlan;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

const KEY_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 20;

fn row(out: &mut String, key: &str, value: impl ToString) {
    out.push_str(&format!(
        "{key:<KEY_WIDTH$}{}\n",
        format_field(value, VALUE_WIDTH)
    ));
}

/// Build the plan summary, followed by any conflicts and node subnet preview.
pub fn format_plan(plan: &NetworkPlan, node_subnets: &[Ipv4]) -> String {
    let resp = &plan.response;
    let mut out = String::new();

    row(&mut out, "pod-network", &resp.pod_network);
    row(&mut out, "service-network", &resp.service_network);
    row(&mut out, "machine-network", &resp.machine_network);
    row(
        &mut out,
        "cni",
        resp.cni.map_or("unspecified", |c| c.as_str()),
    );
    row(&mut out, "number-of-pods", resp.num_pods);
    row(&mut out, "number-of-services", resp.num_services);
    row(&mut out, "number-of-nodes", resp.num_nodes);
    row(&mut out, "machine-network-nodes", resp.machine_network_nodes);
    row(&mut out, "total-pods-per-node", resp.total_pods_per_node);
    match resp.pods_per_node {
        PodsPerNode::Single(pods) => row(&mut out, "pods-per-node", pods),
        PodsPerNode::Dual { sdn, ovn } => {
            row(&mut out, "pods-per-node (sdn)", sdn);
            row(&mut out, "pods-per-node (ovn)", ovn);
        }
    }

    let conflict = if resp.conflict {
        "YES".on_red().to_string()
    } else {
        "no".green().to_string()
    };
    out.push_str(&format!("{:<KEY_WIDTH$}{conflict}\n", "network-conflict"));
    for conflict in &plan.conflicts {
        out.push_str(&format!("  {} {conflict}\n", "!".red()));
    }

    if !node_subnets.is_empty() {
        out.push_str(&format!("node subnets (first {}):\n", node_subnets.len()));
        for (i, subnet) in node_subnets.iter().enumerate() {
            out.push_str(&format!("  {i:>6} {subnet}\n"));
        }
    }

    out
}

pub fn print_plan(plan: &NetworkPlan, node_subnets: &[Ipv4]) {
    print!("{}", format_plan(plan, node_subnets));
}
