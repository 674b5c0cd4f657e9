//! Source loader
//!
//! Reads a dataset file into memory, separating the header line from the
//! record lines. The whole file is materialized up front; the split is a
//! one-shot preparation step and the target working sets (up to a few
//! million records) fit comfortably in memory.

use crate::domain::dataset::RecordSequence;
use crate::domain::errors::SplitError;
use crate::domain::result::Result;
use std::fs;
use std::path::Path;

/// Loads a source file into a record sequence
///
/// The first line becomes the header and is excluded from the records; all
/// remaining lines become records in file order. Interior blank lines are
/// records; the newline terminating the final line does not create a
/// phantom empty record. Line endings are re-applied by the writer.
///
/// # Errors
///
/// Returns `SplitError::SourceNotFound` if the path does not exist (checked
/// before attempting the read), or `SplitError::Io` if the read fails.
pub fn load_source(path: &Path) -> Result<RecordSequence> {
    if !path.exists() {
        return Err(SplitError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;

    let mut lines = contents.lines();
    let header = lines.next().unwrap_or_default().to_owned();
    let records: Vec<String> = lines.map(str::to_owned).collect();

    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "Source file loaded"
    );

    Ok(RecordSequence::new(header, records))
}
