//! Domain models and types for Shardprep.
//!
//! This module contains the core domain models shared across the split
//! pipeline: dataset entries, record sequences, identifier newtypes, and
//! the error taxonomy. Third-party error types never cross this boundary.

pub mod dataset;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types
pub use dataset::{DatasetEntry, RecordSequence};
pub use errors::SplitError;
pub use ids::DatasetId;
pub use result::Result;
