//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Pharmacy DWH - OLTP to star-schema ETL
#[derive(Parser, Debug)]
#[command(name = "pharmacy-dwh")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file [default: pharmacy-dwh.toml, if present]
    #[arg(short, long, env = "PHARMACY_DWH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PHARMACY_DWH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the operational database and fill it with sample data
    Seed(SeedArgs),

    /// Extract, transform and load into the warehouse
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Operational database to create (overrides config `source_path`)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Operational database to read (must exist)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Warehouse database to write
    #[arg(long)]
    pub warehouse: Option<PathBuf>,

    /// Transform only; leave the warehouse untouched
    #[arg(long)]
    pub dry_run: bool,

    /// Print the transformed warehouse rows as JSON
    #[arg(long)]
    pub json: bool,

    /// Year patient ages are measured against [default: current year]
    #[arg(long)]
    pub reference_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["pharmacy-dwh", "run"]);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Run(args) => {
                assert!(!args.dry_run);
                assert!(!args.json);
                assert!(args.source.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_run_flags() {
        let cli = Cli::parse_from([
            "pharmacy-dwh",
            "run",
            "--source",
            "a.db",
            "--warehouse",
            "b.db",
            "--dry-run",
            "--json",
            "--reference-year",
            "2025",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.source, Some(PathBuf::from("a.db")));
                assert_eq!(args.warehouse, Some(PathBuf::from("b.db")));
                assert!(args.dry_run);
                assert!(args.json);
                assert_eq!(args.reference_year, Some(2025));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_seed_with_globals() {
        let cli = Cli::parse_from([
            "pharmacy-dwh",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "seed",
            "--path",
            "oltp.db",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Seed(SeedArgs { path: Some(_) })));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["pharmacy-dwh"]).is_err());
    }
}
