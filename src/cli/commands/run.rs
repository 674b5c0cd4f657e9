//! Run command implementation
//!
//! This module implements the `run` command: resolve the dataset, partition
//! it across the bus destinations, and report the per-bus outcomes.

use crate::config::ShardprepConfig;
use crate::core::split::{ShardStatus, SplitCoordinator, SplitRequest, SplitSummary};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Dataset identifier to split (see `shardprep datasets`)
    pub dataset: String,

    /// Number of bus destinations (configured default applies when omitted)
    pub bus_count: Option<usize>,

    /// Override the destination root directory from the configuration
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Plan and report without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config: &ShardprepConfig) -> anyhow::Result<i32> {
        tracing::info!(dataset = %self.dataset, "Starting split run");

        let request = SplitRequest {
            dataset: self.dataset.clone(),
            bus_count: self.bus_count,
            destination_root: self.dest.clone(),
            dry_run: self.dry_run,
        };

        if self.dry_run && !self.json {
            println!("🔍 DRY RUN MODE - No files will be written");
            println!();
        }

        let coordinator = match SplitCoordinator::new(config.clone()) {
            Ok(coordinator) => coordinator,
            Err(e) => {
                tracing::error!(error = %e, "Failed to build the dataset registry");
                eprintln!("Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };
        let summary = match coordinator.execute(&request) {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!(error = %e, "Split run failed");
                eprintln!("Error: {e}");
                return Ok(1);
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_report(&summary);
        }

        Ok(0)
    }
}

/// Prints the human-readable run report
fn print_report(summary: &SplitSummary) {
    println!("Dataset: {}", summary.dataset);
    println!("Source:  {}", summary.source_path.display());
    println!("Buses:   {}", summary.bus_count);
    println!();
    println!(
        "Loaded {} records (~{} per bus)",
        summary.total_records, summary.chunk_size
    );
    println!();

    for outcome in &summary.outcomes {
        match outcome.status {
            ShardStatus::Written => println!(
                "  ✅ Bus {}: {} records ({} bytes) -> {}",
                outcome.bus_index,
                outcome.record_count,
                outcome.byte_count,
                outcome.path.display()
            ),
            ShardStatus::Skipped => println!(
                "  ⚠️  Bus {}: destination missing, skipped ({})",
                outcome.bus_index,
                outcome.path.display()
            ),
        }
    }

    println!();
    if summary.dry_run {
        println!("Dry run complete: nothing was written.");
        return;
    }

    println!(
        "Preparation complete: {}/{} buses received a shard in {} ms.",
        summary.written_count(),
        summary.bus_count,
        summary.duration_ms
    );
    if summary.written_count() > 0 {
        println!();
        println!("Next steps:");
        println!("  1. Copy each bus directory to its replay machine");
        println!("  2. Start the server and workers");
        println!("  3. Start every bus at the same time to saturate the system");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args_defaults() {
        let args = RunArgs {
            dataset: "small_100k".to_string(),
            bus_count: None,
            dest: None,
            dry_run: false,
            json: false,
        };

        assert_eq!(args.dataset, "small_100k");
        assert!(args.bus_count.is_none());
        assert!(!args.dry_run);
        assert!(!args.json);
    }

    #[tokio::test]
    async fn test_run_unknown_dataset_exits_one() {
        let args = RunArgs {
            dataset: "huge_dataset".to_string(),
            bus_count: None,
            dest: None,
            dry_run: false,
            json: false,
        };

        let code = args.execute(&ShardprepConfig::default()).await.unwrap();
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_run_missing_source_exits_one() {
        let mut config = ShardprepConfig::default();
        config.datasets.insert(
            "ghost".to_string(),
            "no/such/ghost.csv".to_string(),
        );

        let args = RunArgs {
            dataset: "ghost".to_string(),
            bus_count: None,
            dest: None,
            dry_run: false,
            json: false,
        };

        let code = args.execute(&config).await.unwrap();
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_run_zero_bus_count_exits_one() {
        use std::io::Write;

        let mut source = tempfile::NamedTempFile::new().unwrap();
        source.write_all(b"id,value\n1,a\n").unwrap();
        source.flush().unwrap();

        let mut config = ShardprepConfig::default();
        config.datasets.insert(
            "tiny".to_string(),
            source.path().to_str().unwrap().to_string(),
        );

        let args = RunArgs {
            dataset: "tiny".to_string(),
            bus_count: Some(0),
            dest: None,
            dry_run: false,
            json: false,
        };

        let code = args.execute(&config).await.unwrap();
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_run_succeeds_with_skipped_buses() {
        use std::io::Write;

        let mut source = tempfile::NamedTempFile::new().unwrap();
        source.write_all(b"id,value\n1,a\n2,b\n").unwrap();
        source.flush().unwrap();

        let dest = tempfile::TempDir::new().unwrap();

        let mut config = ShardprepConfig::default();
        config.datasets.insert(
            "tiny".to_string(),
            source.path().to_str().unwrap().to_string(),
        );

        // No bus directories exist under dest: every bus is skipped, yet the
        // run still succeeds.
        let args = RunArgs {
            dataset: "tiny".to_string(),
            bus_count: Some(3),
            dest: Some(dest.path().to_path_buf()),
            dry_run: false,
            json: false,
        };

        let code = args.execute(&config).await.unwrap();
        assert_eq!(code, 0);
    }
}
