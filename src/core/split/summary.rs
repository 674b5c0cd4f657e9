//! Split summary and reporting
//!
//! This module defines structures for tracking and reporting the outcome of
//! a split run: which buses received a shard, which were skipped, and the
//! per-destination record and byte counts.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShardStatus {
    /// The shard file was written (or would have been, in a dry run)
    Written,
    /// The destination directory was missing and the bus was skipped
    Skipped,
}

/// Per-destination result of a split run
#[derive(Debug, Clone, Serialize)]
pub struct ShardOutcome {
    /// 1-based bus index
    pub bus_index: usize,

    /// Output file path for a written shard, or the missing destination
    /// directory for a skipped one
    pub path: PathBuf,

    /// Written or skipped
    pub status: ShardStatus,

    /// Number of records assigned to this bus (0 for skipped outcomes)
    pub record_count: usize,

    /// Bytes written including the header line (0 for skipped outcomes)
    pub byte_count: usize,
}

impl ShardOutcome {
    /// Records a written shard
    pub fn written(
        bus_index: usize,
        path: impl Into<PathBuf>,
        record_count: usize,
        byte_count: usize,
    ) -> Self {
        Self {
            bus_index,
            path: path.into(),
            status: ShardStatus::Written,
            record_count,
            byte_count,
        }
    }

    /// Records a skipped bus whose destination directory was missing
    pub fn skipped(bus_index: usize, missing_dir: impl Into<PathBuf>) -> Self {
        Self {
            bus_index,
            path: missing_dir.into(),
            status: ShardStatus::Skipped,
            record_count: 0,
            byte_count: 0,
        }
    }

    /// Whether the shard was written
    pub fn is_written(&self) -> bool {
        self.status == ShardStatus::Written
    }
}

/// Summary of a split run
#[derive(Debug, Clone, Serialize)]
pub struct SplitSummary {
    /// Dataset identifier that was split
    pub dataset: String,

    /// Resolved source file path
    pub source_path: PathBuf,

    /// Total number of records in the source (header excluded)
    pub total_records: usize,

    /// Number of bus destinations in the plan
    pub bus_count: usize,

    /// Per-bus record quota
    pub chunk_size: usize,

    /// Whether this was a dry run (nothing written to disk)
    pub dry_run: bool,

    /// Per-destination outcomes, in ascending bus order
    pub outcomes: Vec<ShardOutcome>,

    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
}

impl SplitSummary {
    /// Creates a new summary with no outcomes yet
    pub fn new(
        dataset: impl Into<String>,
        source_path: impl Into<PathBuf>,
        total_records: usize,
        bus_count: usize,
        chunk_size: usize,
        dry_run: bool,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            source_path: source_path.into(),
            total_records,
            bus_count,
            chunk_size,
            dry_run,
            outcomes: Vec::with_capacity(bus_count),
            duration_ms: 0,
        }
    }

    /// Appends a per-destination outcome
    pub fn add_outcome(&mut self, outcome: ShardOutcome) {
        self.outcomes.push(outcome);
    }

    /// Sets the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = duration.as_millis() as u64;
        self
    }

    /// Number of buses that received a shard
    pub fn written_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    /// Number of buses skipped because their directory was missing
    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.written_count()
    }

    /// Total records placed into written shards
    pub fn written_records(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.is_written())
            .map(|o| o.record_count)
            .sum()
    }

    /// Whether every bus destination received its shard
    pub fn is_complete(&self) -> bool {
        self.skipped_count() == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            dataset = %self.dataset,
            total_records = self.total_records,
            bus_count = self.bus_count,
            chunk_size = self.chunk_size,
            written = self.written_count(),
            skipped = self.skipped_count(),
            dry_run = self.dry_run,
            duration_ms = self.duration_ms,
            "Split completed"
        );

        for outcome in &self.outcomes {
            match outcome.status {
                ShardStatus::Written => tracing::info!(
                    bus = outcome.bus_index,
                    path = %outcome.path.display(),
                    records = outcome.record_count,
                    bytes = outcome.byte_count,
                    "Shard written"
                ),
                ShardStatus::Skipped => tracing::warn!(
                    bus = outcome.bus_index,
                    path = %outcome.path.display(),
                    "Destination missing, bus skipped"
                ),
            }
        }
    }
}
