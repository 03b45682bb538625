use clap::Parser;
use openshift_network_calculator::cli::{run, Cli};
use openshift_network_calculator::logging::init_logging;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(&cli.log_config_path())?;
    //
    log::debug!("#Start main()");

    run(cli).await
}
