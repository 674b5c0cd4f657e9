//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Shardprep using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Shardprep - dataset partitioner for multi-bus load-test replay
#[derive(Parser, Debug)]
#[command(name = "shardprep")]
#[command(version, about, long_about = None)]
#[command(author = "Shardprep Contributors")]
pub struct Cli {
    /// Path to configuration file (built-in defaults apply when absent)
    #[arg(short, long, env = "SHARDPREP_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHARDPREP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a dataset across the bus destination directories
    Run(commands::run::RunArgs),

    /// List the registered datasets and their source files
    Datasets(commands::datasets::DatasetsArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["shardprep", "run", "small_100k"]);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.dataset, "small_100k");
                assert!(args.bus_count.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_run_with_bus_count() {
        let cli = Cli::parse_from(["shardprep", "run", "medium_1m", "5"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.dataset, "medium_1m");
                assert_eq!(args.bus_count, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_run_requires_dataset() {
        assert!(Cli::try_parse_from(["shardprep", "run"]).is_err());
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["shardprep", "--config", "custom.toml", "datasets"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["shardprep", "--log-level", "debug", "datasets"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_datasets() {
        let cli = Cli::parse_from(["shardprep", "datasets"]);
        assert!(matches!(cli.command, Commands::Datasets(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["shardprep", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_run_flags() {
        let cli = Cli::parse_from([
            "shardprep", "run", "small_100k", "3", "--dry-run", "--json",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert!(args.dry_run);
                assert!(args.json);
                assert!(args.dest.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
