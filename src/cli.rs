//! Command line interface for the `onc` binary.

use crate::models::{CniPlugin, Ipv4, NetworkPlanRequest};
use crate::output::print_plan;
use crate::planner::plan_network_with_conflicts;
use crate::processing::node_subnets;
use crate::server::{serve, ServerConfig};
use clap::{Args, Parser, Subcommand};
use std::error::Error;

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Parser, Debug)]
#[command(
    name = "onc",
    version,
    about = "OpenShift network calculator: pod, service and node capacity of a cluster network plan"
)]
pub struct Cli {
    /// log4rs YAML config (default: $ONC_LOG_CONFIG or log4rs.yml)
    #[arg(long, global = true)]
    pub log_config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API (POST / with a JSON plan request)
    Serve {
        /// Address to bind (default: $ONC_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (default: $ONC_PORT or 8080)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Compute a single plan and print it
    Calc(CalcArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    /// Prefix length of each node's pod subnet
    #[arg(long, default_value_t = 23)]
    pub host_prefix: u8,
    #[arg(long, default_value = "10.128.0.0/14")]
    pub cluster_network: String,
    #[arg(long, default_value = "172.30.0.0/16")]
    pub service_network: String,
    #[arg(long, default_value = "192.168.1.0/24")]
    pub machine_network: String,
    /// ovn-kubernetes or openshift-sdn; both budgets are shown when omitted
    #[arg(long)]
    pub cni: Option<CniPlugin>,
    /// Print the JSON response instead of a table
    #[arg(long)]
    pub json: bool,
    /// Also list the first N node subnets carved from the cluster network
    #[arg(long, default_value_t = 0)]
    pub show_node_subnets: usize,
}

impl From<&CalcArgs> for NetworkPlanRequest {
    fn from(args: &CalcArgs) -> Self {
        NetworkPlanRequest {
            host_prefix: args.host_prefix,
            cluster_network: args.cluster_network.clone(),
            service_network: args.service_network.clone(),
            machine_network: args.machine_network.clone(),
            cni: args.cni,
        }
    }
}

impl Cli {
    /// Log config path: flag, then `ONC_LOG_CONFIG`, then the default.
    pub fn log_config_path(&self) -> String {
        self.log_config
            .clone()
            .or_else(|| std::env::var("ONC_LOG_CONFIG").ok())
            .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string())
    }
}

fn calc(args: &CalcArgs) -> Result<(), Box<dyn Error>> {
    let request = NetworkPlanRequest::from(args);
    let plan = plan_network_with_conflicts(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan.response)?);
        return Ok(());
    }

    let preview: Vec<Ipv4> = if args.show_node_subnets > 0 {
        let cluster = Ipv4::new(&request.cluster_network)?;
        node_subnets(&cluster, request.host_prefix)?
            .take(args.show_node_subnets)
            .collect()
    } else {
        Vec::new()
    };
    print_plan(&plan, &preview);
    Ok(())
}

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Serve { host, port } => {
            let config = ServerConfig::from_env().with_overrides(host, port);
            serve(config).await?;
        }
        Command::Calc(args) => calc(&args)?,
    }
    Ok(())
}
