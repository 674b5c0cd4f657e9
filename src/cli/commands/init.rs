//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "shardprep.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Shardprep configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_starter_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your dataset paths", self.output);
                println!("  2. Create the bus directories on the machines that will replay");
                println!("  3. List datasets: shardprep datasets");
                println!("  4. Split one: shardprep run small_100k 3");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(1)
            }
        }
    }

    /// Generate the starter configuration
    fn generate_starter_config() -> String {
        r#"# Shardprep Configuration File
# Partitions record datasets into per-bus shards for load-test replay.
# Every setting is optional; the values below are the built-in defaults.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[split]
# Bus count used when `shardprep run` omits one
default_bus_count = 3

[layout]
# For bus index i the destination directory is
# <destination_root>/<bus_dir_prefix><i>/<data_subdir>, and the shard file
# inside it is named <output_file>. Directories are never created by the
# tool; a missing one means the bus is not present on this machine.
destination_root = "dist"
bus_dir_prefix = "bus_"
data_subdir = "data"
output_file = "datagrams.csv"

[datasets]
# identifier = "path/to/source.csv"
small_100k = "data/experiments/small_100k.csv"
medium_1m = "data/experiments/medium_1m.csv"
large_8m = "data/experiments/large_8m.csv"
"#
        .to_string()
    }
}
