//! Datasets command implementation
//!
//! This module implements the `datasets` command for listing the registered
//! datasets and whether their source files are present on disk.

use crate::config::ShardprepConfig;
use crate::core::registry::DatasetRegistry;
use clap::Args;

/// Arguments for the datasets command
#[derive(Args, Debug)]
pub struct DatasetsArgs {}

impl DatasetsArgs {
    /// Execute the datasets command
    pub async fn execute(&self, config: &ShardprepConfig) -> anyhow::Result<i32> {
        let registry = match DatasetRegistry::from_config(config) {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };
        tracing::info!(count = registry.len(), "Listing registered datasets");

        println!("Registered datasets ({}):", registry.len());
        println!();

        for entry in registry.entries() {
            let marker = if entry.source_path.exists() { "✅" } else { "❌" };
            println!(
                "  {marker} {:<12} -> {}",
                entry.id,
                entry.source_path.display()
            );
        }

        println!();
        println!("❌ marks a source file that is not present on this machine.");
        println!("Split one with: shardprep run <dataset> [bus_count]");
        Ok(0)
    }
}
