//! Split pipeline
//!
//! The coordinator drives the whole run as a single forward pass: resolve
//! the dataset, load the source, compute the partition plan, then write one
//! shard per bus in ascending order. There are no retries and no rollback;
//! a skipped destination never undoes previously written shards.

pub mod partition;
pub mod summary;
pub mod writer;

pub use partition::{BusRange, PartitionPlan};
pub use summary::{ShardOutcome, ShardStatus, SplitSummary};
pub use writer::ShardWriter;

use crate::config::ShardprepConfig;
use crate::core::registry::DatasetRegistry;
use crate::core::source;
use crate::domain::result::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Parameters of one split run
#[derive(Debug, Clone)]
pub struct SplitRequest {
    /// Dataset identifier to resolve and split
    pub dataset: String,

    /// Number of bus destinations; the configured default applies when None
    pub bus_count: Option<usize>,

    /// Destination root override; the configured root applies when None
    pub destination_root: Option<PathBuf>,

    /// Plan and report without writing any files
    pub dry_run: bool,
}

impl SplitRequest {
    /// Creates a request with defaults for everything but the dataset
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            bus_count: None,
            destination_root: None,
            dry_run: false,
        }
    }
}

/// Orchestrates a split run end to end
pub struct SplitCoordinator {
    config: ShardprepConfig,
    registry: DatasetRegistry,
}

impl SplitCoordinator {
    /// Creates a coordinator, building the dataset registry from the
    /// configuration
    pub fn new(config: ShardprepConfig) -> Result<Self> {
        let registry = DatasetRegistry::from_config(&config)?;
        Ok(Self { config, registry })
    }

    /// The dataset registry backing this coordinator
    pub fn registry(&self) -> &DatasetRegistry {
        &self.registry
    }

    /// Executes a split run
    ///
    /// # Errors
    ///
    /// Fails fast on an unknown dataset, a missing source file, or a zero
    /// bus count; no output is attempted in those cases. Missing destination
    /// directories are not errors and are reported in the summary instead.
    pub fn execute(&self, request: &SplitRequest) -> Result<SplitSummary> {
        let started = Instant::now();

        let source_path = self.registry.resolve(&request.dataset)?;
        tracing::info!(
            dataset = %request.dataset,
            source = %source_path.display(),
            "Loading source file"
        );
        let sequence = source::load_source(source_path)?;

        let bus_count = request
            .bus_count
            .unwrap_or(self.config.split.default_bus_count);
        let plan = PartitionPlan::plan(sequence.len(), bus_count)?;
        tracing::info!(
            total_records = sequence.len(),
            bus_count = plan.bus_count,
            chunk_size = plan.chunk_size,
            "Partition plan computed"
        );

        let destination_root: &Path = request
            .destination_root
            .as_deref()
            .unwrap_or_else(|| Path::new(&self.config.layout.destination_root));
        let writer = ShardWriter::new(&self.config.layout, destination_root, request.dry_run);

        let mut summary = SplitSummary::new(
            &request.dataset,
            source_path,
            sequence.len(),
            plan.bus_count,
            plan.chunk_size,
            request.dry_run,
        );
        for range in plan.ranges() {
            summary.add_outcome(writer.write_shard(range, &sequence)?);
        }

        let summary = summary.with_duration(started.elapsed());
        summary.log_summary();
        Ok(summary)
    }
}
