// Shardprep - Dataset partitioner for multi-bus load-test replay
// Copyright (c) 2025 Shardprep Contributors
// Licensed under the MIT License

use clap::error::ErrorKind;
use clap::Parser;
use shardprep::cli::{Cli, Commands};
use shardprep::config::{load_config, ShardprepConfig};
use shardprep::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments; a missing argument is an invalid invocation and
    // exits 1, while --help and --version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    // Load configuration (built-in defaults when no file is present)
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    // Initialize logging; the CLI flag wins over the configured level
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    if let Err(e) = init_logging(log_level) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(2);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Shardprep - dataset partitioner for multi-bus load-test replay"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: &ShardprepConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Run(args) => args.execute(config).await,
        Commands::Datasets(args) => args.execute(config).await,
        Commands::Init(args) => args.execute().await,
    }
}
