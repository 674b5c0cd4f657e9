//! Partition planning
//!
//! Computes the contiguous, non-overlapping index ranges that assign every
//! record of a dataset to exactly one bus. The plan is a pure function of
//! (total record count, bus count): same inputs always produce the same
//! ranges.

use crate::domain::errors::SplitError;
use crate::domain::result::Result;

/// The half-open record range `[start, end)` assigned to one bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusRange {
    /// 1-based bus index
    pub bus_index: usize,

    /// First assigned record index (inclusive)
    pub start: usize,

    /// One past the last assigned record index
    pub end: usize,
}

impl BusRange {
    /// Number of records in the range
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range holds no records
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A complete partition of `[0, total_records)` across `bus_count` buses
///
/// Ranges are contiguous, non-overlapping, and cover every record exactly
/// once. The chunk size is `ceil(total_records / bus_count)`; the remainder
/// is absorbed by the final non-empty range, and trailing buses past the
/// end of the data receive empty ranges. Empty ranges are still enumerated
/// so the writer applies its skip/warn policy uniformly to every bus.
#[derive(Debug, Clone)]
pub struct PartitionPlan {
    /// Number of bus destinations
    pub bus_count: usize,

    /// Per-bus record quota, `ceil(total_records / bus_count)`
    pub chunk_size: usize,

    ranges: Vec<BusRange>,
}

impl PartitionPlan {
    /// Computes the partition plan for a record count and bus count
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidArgument` when `bus_count` is zero.
    pub fn plan(total_records: usize, bus_count: usize) -> Result<Self> {
        if bus_count == 0 {
            return Err(SplitError::InvalidArgument(
                "bus count must be at least 1".to_string(),
            ));
        }

        let chunk_size = total_records.div_ceil(bus_count);
        let ranges = (1..=bus_count)
            .map(|bus_index| {
                let start = ((bus_index - 1) * chunk_size).min(total_records);
                let end = (start + chunk_size).min(total_records);
                BusRange {
                    bus_index,
                    start,
                    end,
                }
            })
            .collect();

        Ok(Self {
            bus_count,
            chunk_size,
            ranges,
        })
    }

    /// The per-bus ranges, in ascending bus order
    pub fn ranges(&self) -> &[BusRange] {
        &self.ranges
    }

    /// Total number of records assigned across all ranges
    pub fn assigned_records(&self) -> usize {
        self.ranges.iter().map(BusRange::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn assert_covers_exactly(plan: &PartitionPlan, total: usize) {
        let ranges = plan.ranges();
        assert_eq!(ranges.len(), plan.bus_count);
        assert_eq!(ranges[0].start, 0);
        assert_eq!(ranges[ranges.len() - 1].end, total);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "ranges must be contiguous");
        }
        assert_eq!(plan.assigned_records(), total);
    }

    #[test]
    fn test_ten_records_three_buses() {
        let plan = PartitionPlan::plan(10, 3).unwrap();

        assert_eq!(plan.chunk_size, 4);
        let ranges = plan.ranges();
        assert_eq!((ranges[0].start, ranges[0].end), (0, 4));
        assert_eq!((ranges[1].start, ranges[1].end), (4, 8));
        assert_eq!((ranges[2].start, ranges[2].end), (8, 10));
        assert_eq!(ranges[2].len(), 2);
        assert_covers_exactly(&plan, 10);
    }

    #[test]
    fn test_single_bus_takes_everything() {
        let plan = PartitionPlan::plan(7, 1).unwrap();

        assert_eq!(plan.chunk_size, 7);
        let ranges = plan.ranges();
        assert_eq!(ranges.len(), 1);
        assert_eq!((ranges[0].start, ranges[0].end), (0, 7));
    }

    #[test]
    fn test_zero_records_yields_empty_ranges_for_every_bus() {
        let plan = PartitionPlan::plan(0, 4).unwrap();

        assert_eq!(plan.chunk_size, 0);
        assert_eq!(plan.ranges().len(), 4);
        for range in plan.ranges() {
            assert!(range.is_empty());
        }
        assert_covers_exactly(&plan, 0);
    }

    #[test]
    fn test_more_buses_than_records() {
        let plan = PartitionPlan::plan(2, 5).unwrap();

        // chunk of 1: buses 1 and 2 get one record each, the rest are empty
        assert_eq!(plan.chunk_size, 1);
        let ranges = plan.ranges();
        assert_eq!(ranges[0].len(), 1);
        assert_eq!(ranges[1].len(), 1);
        for range in &ranges[2..] {
            assert!(range.is_empty());
            assert_eq!(range.start, 2);
        }
        assert_covers_exactly(&plan, 2);
    }

    #[test]
    fn test_zero_bus_count_rejected() {
        let err = PartitionPlan::plan(10, 0).unwrap_err();
        assert!(matches!(err, SplitError::InvalidArgument(_)));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let first = PartitionPlan::plan(1000, 7).unwrap();
        let second = PartitionPlan::plan(1000, 7).unwrap();
        assert_eq!(first.ranges(), second.ranges());
    }

    #[test]
    fn test_bus_indices_are_one_based_and_ascending() {
        let plan = PartitionPlan::plan(9, 3).unwrap();
        let indices: Vec<usize> = plan.ranges().iter().map(|r| r.bus_index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test_case(1, 1)]
    #[test_case(10, 3)]
    #[test_case(100_000, 3)]
    #[test_case(1_000_000, 3)]
    #[test_case(8_000_000, 3)]
    #[test_case(17, 5)]
    #[test_case(5, 17)]
    #[test_case(0, 1)]
    #[test_case(0, 12)]
    #[test_case(999, 1000)]
    fn test_every_record_assigned_exactly_once(total: usize, buses: usize) {
        let plan = PartitionPlan::plan(total, buses).unwrap();
        assert_covers_exactly(&plan, total);
        assert_eq!(plan.chunk_size, total.div_ceil(buses));
    }

    #[test_case(10, 3 => 4)]
    #[test_case(9, 3 => 3)]
    #[test_case(1, 3 => 1)]
    #[test_case(0, 3 => 0)]
    fn test_chunk_size_is_ceiling_division(total: usize, buses: usize) -> usize {
        PartitionPlan::plan(total, buses).unwrap().chunk_size
    }
}
