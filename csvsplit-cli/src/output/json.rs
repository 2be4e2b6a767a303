//! JSON report formatter

use super::{failure_message, ReportFormatter};
use anyhow::Result;
use csvsplit_core::{ErrorKind, SplitError, SplitReport};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON formatter - outputs one entry per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<RunEntry>,
}

/// Data structure for one input in JSON output
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunEntry {
    /// The run finished (with or without files written)
    Ok {
        /// Full run report
        report: SplitReport,
    },
    /// The run was aborted
    Error {
        /// Input file of the failed run
        input: PathBuf,
        /// Error classification
        kind: ErrorKind,
        /// Error message
        message: String,
    },
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &SplitReport) -> Result<()> {
        self.entries.push(RunEntry::Ok {
            report: report.clone(),
        });
        Ok(())
    }

    fn format_failure(&mut self, input: &Path, error: &SplitError) -> Result<()> {
        self.entries.push(RunEntry::Error {
            input: input.to_path_buf(),
            kind: error.kind(),
            message: failure_message(error),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
