//! Core dataset models
//!
//! A dataset is a newline-delimited record file whose first line is a header
//! shared by every shard. These types carry the file contents through the
//! split pipeline without reordering or deduplicating anything.

use crate::domain::ids::DatasetId;
use std::path::PathBuf;

/// A registered dataset: symbolic name plus the source file it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEntry {
    /// Symbolic identifier used on the command line
    pub id: DatasetId,

    /// Path of the source record file
    pub source_path: PathBuf,
}

impl DatasetEntry {
    /// Creates a new dataset entry
    pub fn new(id: DatasetId, source_path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            source_path: source_path.into(),
        }
    }
}

/// An in-memory dataset: the header line plus the ordered record lines.
///
/// Records preserve source file order. The sequence is read once and then
/// only sliced; it is never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSequence {
    /// First line of the source file, copied verbatim to every shard
    pub header: String,

    /// All remaining lines, in file order
    pub records: Vec<String>,
}

impl RecordSequence {
    /// Creates a record sequence from a header and records
    pub fn new(header: impl Into<String>, records: Vec<String>) -> Self {
        Self {
            header: header.into(),
            records,
        }
    }

    /// Number of records (the header is not a record)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sequence holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_entry_creation() {
        let entry = DatasetEntry::new(
            DatasetId::new("small_100k").unwrap(),
            "data/experiments/small_100k.csv",
        );
        assert_eq!(entry.id.as_str(), "small_100k");
        assert_eq!(
            entry.source_path,
            PathBuf::from("data/experiments/small_100k.csv")
        );
    }

    #[test]
    fn test_record_sequence_len() {
        let sequence = RecordSequence::new(
            "id,value",
            vec!["1,a".to_string(), "2,b".to_string()],
        );
        assert_eq!(sequence.len(), 2);
        assert!(!sequence.is_empty());
    }

    #[test]
    fn test_record_sequence_empty() {
        let sequence = RecordSequence::new("id,value", Vec::new());
        assert_eq!(sequence.len(), 0);
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_header_is_not_a_record() {
        let sequence = RecordSequence::new("id,value", vec!["1,a".to_string()]);
        assert_eq!(sequence.header, "id,value");
        assert_eq!(sequence.records, vec!["1,a".to_string()]);
    }
}
