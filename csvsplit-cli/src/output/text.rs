//! Plain text report formatter

use super::{failure_message, ReportFormatter};
use anyhow::Result;
use csvsplit_core::{SplitError, SplitOutcome, SplitReport};
use std::io::{self, Write};
use std::path::Path;

/// Plain text formatter - human-readable summary per input
pub struct TextFormatter<W: Write, E: Write> {
    writer: W,
    errors: E,
}

impl<W: Write, E: Write> TextFormatter<W, E> {
    /// Create a new text formatter writing reports to `writer` and
    /// failures to `errors`
    pub fn new(writer: W, errors: E) -> Self {
        Self { writer, errors }
    }
}

impl TextFormatter<io::Stdout, io::Stderr> {
    /// Create a formatter that writes to stdout and stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> ReportFormatter for TextFormatter<W, E> {
    fn format_report(&mut self, report: &SplitReport) -> Result<()> {
        let w = &mut self.writer;
        writeln!(w, "Input: {}", report.input.display())?;
        writeln!(w, "Original lines: {}", report.original_count)?;
        writeln!(w, "Unique lines: {}", report.unique_count)?;
        writeln!(w, "Duplicates removed: {}", report.duplicate_count)?;
        if let Some(preview) = report.header_preview() {
            writeln!(w, "Header: {preview}")?;
        }

        if report.outcome == SplitOutcome::NoData {
            writeln!(w, "Warning: no data to split")?;
            writeln!(w)?;
            return Ok(());
        }

        writeln!(w)?;
        writeln!(w, "Split configuration:")?;
        writeln!(w, "  - parts: {}", report.split_count)?;
        writeln!(w, "  - data lines: {}", report.data_count)?;
        writeln!(w, "  - base lines per part: {}", report.base_lines_per_part)?;
        writeln!(
            w,
            "  - parts with one extra line: {}",
            report.parts_with_extra_line
        )?;

        for part in &report.parts {
            writeln!(w, "  Created: {} ({} lines)", part.file_name, part.total_lines)?;
        }

        writeln!(w)?;
        writeln!(w, "Done! {} files created", report.files_created())?;
        writeln!(w, "Output directory: {}", report.output_dir.display())?;
        writeln!(w)?;
        Ok(())
    }

    fn format_failure(&mut self, input: &Path, error: &SplitError) -> Result<()> {
        writeln!(
            self.errors,
            "Error: {}: {}",
            input.display(),
            failure_message(error)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.errors.flush()?;
        Ok(())
    }
}
