//! Order-preserving line deduplication

use std::collections::HashSet;

/// Result of deduplicating a sequence of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deduplicated {
    /// Unique trimmed lines in first-occurrence order
    pub lines: Vec<String>,
    /// Number of physical input lines
    pub original_count: usize,
    /// Lines dropped because they repeat an earlier line
    pub duplicate_count: usize,
    /// Lines dropped because they are empty after trimming
    pub blank_count: usize,
}

impl Deduplicated {
    /// Number of unique lines kept
    pub fn unique_count(&self) -> usize {
        self.lines.len()
    }
}

/// Deduplicate `lines` on their trimmed content
///
/// Blank lines are neither kept nor counted as duplicates, so
/// `unique + duplicate + blank == original` always holds.
pub fn deduplicate<'a, I>(lines: I) -> Deduplicated
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut result = Deduplicated::default();

    for line in lines {
        result.original_count += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            result.blank_count += 1;
        } else if seen.insert(trimmed) {
            result.lines.push(trimmed.to_string());
        } else {
            result.duplicate_count += 1;
        }
    }

    result
}
