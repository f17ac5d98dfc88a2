mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::config::CliConfig;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("xrayref CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration.");
            CliConfig::load(path)?
        }
        None => CliConfig::default(),
    };
    let resolver = config.build_resolver(&cli.prefer)?;
    debug!(priority = ?resolver.reference_priority(), "Resolver ready.");

    let result = match cli.command {
        Commands::Line(args) => {
            info!("Dispatching to 'line' command.");
            commands::line::run(&resolver, args)
        }
        Commands::Lines(args) => {
            info!("Dispatching to 'lines' command.");
            commands::lines::run(&resolver, args)
        }
        Commands::Element(args) => {
            info!("Dispatching to 'element' command.");
            commands::element::run(&resolver, args)
        }
        Commands::Composition(args) => {
            info!("Dispatching to 'composition' command.");
            commands::composition::run(&resolver, args)
        }
    };

    if let Err(e) = &result {
        error!("Command failed: {}", e);
    }
    result
}
