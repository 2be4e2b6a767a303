//! Run report

use serde::Serialize;
use std::path::PathBuf;

/// Maximum number of header characters shown in previews
pub const HEADER_PREVIEW_CHARS: usize = 50;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitOutcome {
    /// Part files were written
    Completed,
    /// Nothing left to split after deduplication; no files written
    NoData,
}

/// One written part file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartReport {
    /// Zero-based partition index
    pub index: usize,
    /// Full path of the written file
    pub path: PathBuf,
    /// File name only
    pub file_name: String,
    /// Data lines in this part
    pub data_lines: usize,
    /// Lines in the file, header included
    pub total_lines: usize,
}

/// Summary of a split run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub encoding: String,
    pub original_count: usize,
    pub unique_count: usize,
    pub duplicate_count: usize,
    pub blank_count: usize,
    pub header: Option<String>,
    pub data_count: usize,
    pub split_count: usize,
    pub base_lines_per_part: usize,
    pub parts_with_extra_line: usize,
    pub parts: Vec<PartReport>,
    pub outcome: SplitOutcome,
}

impl SplitReport {
    /// Number of part files written
    pub fn files_created(&self) -> usize {
        self.parts.len()
    }

    /// Header shortened for display, if there is one
    pub fn header_preview(&self) -> Option<String> {
        self.header.as_deref().map(header_preview)
    }
}

/// First [`HEADER_PREVIEW_CHARS`] characters of `header`, with `...` appended
/// when it was cut
pub fn header_preview(header: &str) -> String {
    match header.char_indices().nth(HEADER_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &header[..cut]),
        None => header.to_string(),
    }
}
