//! Pharmacy DWH command-line runner.

mod cli;
mod commands;
mod config;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Commands};
use config::Config;
use logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(2);
        }
    };

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    if let Err(e) = init_logging(log_level) {
        eprintln!("{e:#}");
        return ExitCode::from(2);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Pharmacy DWH ETL");

    let result = match &cli.command {
        Commands::Seed(args) => args.execute(&config),
        Commands::Run(args) => args.execute(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
