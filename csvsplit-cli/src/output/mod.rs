//! Report output module

use anyhow::Result;
use csvsplit_core::{SplitError, SplitReport};
use serde::{Deserialize, Serialize};
use std::error::Error as _;
use std::path::Path;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Output the report of one finished run
    fn format_report(&mut self, report: &SplitReport) -> Result<()>;

    /// Output a failed run
    fn format_failure(&mut self, input: &Path, error: &SplitError) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON array with one entry per input file
    Json,
}

impl OutputFormat {
    /// Every supported format
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Json];

    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// User-facing message for a failed run
///
/// Unexpected errors carry their whole source chain so nothing is hidden.
pub fn failure_message(error: &SplitError) -> String {
    let mut message = error.to_string();
    if let SplitError::UnexpectedError { .. } = error {
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(&format!("\n  caused by: {cause:?}"));
            source = cause.source();
        }
    }
    message
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
