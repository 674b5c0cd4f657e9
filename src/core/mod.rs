//! Business logic for Shardprep
//!
//! The pipeline is strictly linear: the registry resolves a dataset name to
//! a source file, the source loader reads it into memory, the partitioner
//! computes per-bus ranges, and the shard writer emits one file per
//! materialized bus directory.

pub mod registry;
pub mod source;
pub mod split;

pub use registry::DatasetRegistry;
pub use split::{SplitCoordinator, SplitRequest};
