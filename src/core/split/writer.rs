//! Shard writer
//!
//! Writes one output file per bus destination: the shared header line
//! followed by the bus's assigned record range, in order. A destination
//! whose directory does not exist is skipped with a warning; the tool never
//! creates bus directories itself, because a missing directory means the
//! bus is not materialized on this machine.

use crate::config::LayoutConfig;
use crate::core::split::partition::BusRange;
use crate::core::split::summary::ShardOutcome;
use crate::domain::dataset::RecordSequence;
use crate::domain::result::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Transient view of one bus's output, assembled immediately before writing
struct Shard<'s> {
    bus_index: usize,
    path: PathBuf,
    header: &'s str,
    records: &'s [String],
}

impl Shard<'_> {
    /// Output size in bytes, each line terminated by a single newline
    fn byte_len(&self) -> usize {
        self.header.len()
            + 1
            + self
                .records
                .iter()
                .map(|record| record.len() + 1)
                .sum::<usize>()
    }

    /// Creates or overwrites the output file with the header and records
    fn write(&self) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", self.header)?;
        for record in self.records {
            writeln!(writer, "{record}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Writes shards to the per-bus destination directories
pub struct ShardWriter<'a> {
    layout: &'a LayoutConfig,
    destination_root: &'a Path,
    dry_run: bool,
}

impl<'a> ShardWriter<'a> {
    /// Creates a writer for the given layout and destination root
    pub fn new(layout: &'a LayoutConfig, destination_root: &'a Path, dry_run: bool) -> Self {
        Self {
            layout,
            destination_root,
            dry_run,
        }
    }

    /// Writes the shard for one bus range, or skips it when the destination
    /// directory is missing
    ///
    /// Skipping is not an error: the run continues with the next bus and the
    /// skip is reported in the returned outcome. A write failure on an
    /// existing directory is fatal; previously written shards are left in
    /// place.
    pub fn write_shard(
        &self,
        range: &BusRange,
        sequence: &RecordSequence,
    ) -> Result<ShardOutcome> {
        let bus_dir = self.layout.bus_dir(self.destination_root, range.bus_index);

        if !bus_dir.exists() {
            tracing::warn!(
                bus = range.bus_index,
                path = %bus_dir.display(),
                "Destination directory missing, skipping bus"
            );
            return Ok(ShardOutcome::skipped(range.bus_index, bus_dir));
        }

        let shard = Shard {
            bus_index: range.bus_index,
            path: bus_dir.join(&self.layout.output_file),
            header: &sequence.header,
            records: &sequence.records[range.start..range.end],
        };
        let byte_count = shard.byte_len();

        if !self.dry_run {
            shard.write()?;
        }

        tracing::debug!(
            bus = shard.bus_index,
            path = %shard.path.display(),
            records = shard.records.len(),
            bytes = byte_count,
            dry_run = self.dry_run,
            "Shard prepared"
        );

        Ok(ShardOutcome::written(
            shard.bus_index,
            shard.path,
            shard.records.len(),
            byte_count,
        ))
    }
}
