mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use aufbau::core::constants::PhysicalConstants;
use clap::Parser;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("aufbau CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let constants = match &cli.constants {
        Some(path) => {
            info!("Loading physical constants from '{}'.", path.display());
            PhysicalConstants::load(path)?
        }
        None => PhysicalConstants::default(),
    };

    match cli.command {
        Commands::Configure(args) => commands::configure::run(&args),
        Commands::Describe(args) => commands::describe::run(&args),
        Commands::Transition(args) => commands::transition::run(&args, &constants),
        Commands::Absorb(args) => commands::absorb::run(&args, &constants),
    }
}
