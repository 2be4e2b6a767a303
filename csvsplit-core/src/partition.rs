//! Even partitioning of the data lines

use std::ops::Range;

/// One contiguous slice of the data lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Zero-based partition index
    pub index: usize,
    /// Offset of the first line in the data sequence
    pub start: usize,
    /// Number of data lines
    pub len: usize,
}

impl Partition {
    /// Line range covered by this partition
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Whether the partition holds no lines (and produces no file)
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Layout of `total` lines over `count` partitions
///
/// The first `total % count` partitions receive `total / count + 1` lines,
/// the rest receive `total / count`. Partitions are contiguous and cover the
/// data exactly once, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    total: usize,
    base: usize,
    extra: usize,
    partitions: Vec<Partition>,
}

impl PartitionPlan {
    /// Plan `total` lines over `count` partitions
    ///
    /// `count` must be positive; [`crate::SplitConfig`] guarantees it.
    pub fn new(total: usize, count: usize) -> Self {
        debug_assert!(count > 0, "partition count must be positive");
        let count = count.max(1);

        let base = total / count;
        let extra = total % count;

        let mut partitions = Vec::with_capacity(count);
        let mut start = 0;
        for index in 0..count {
            let len = if index < extra { base + 1 } else { base };
            partitions.push(Partition { index, start, len });
            start += len;
        }

        Self {
            total,
            base,
            extra,
            partitions,
        }
    }

    /// Total number of data lines
    pub fn total(&self) -> usize {
        self.total
    }

    /// Lines every partition gets at minimum
    pub fn base(&self) -> usize {
        self.base
    }

    /// Number of partitions that get one extra line
    pub fn extra(&self) -> usize {
        self.extra
    }

    /// Every partition, including empty ones
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Partitions that produce a file
    pub fn non_empty(&self) -> impl Iterator<Item = &Partition> + '_ {
        self.partitions.iter().filter(|p| !p.is_empty())
    }

    /// Number of partitions that produce a file
    pub fn non_empty_count(&self) -> usize {
        self.total.min(self.partitions.len())
    }
}
