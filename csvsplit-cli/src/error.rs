//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched any of the input patterns
    NoFilesMatched(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration file error
    ConfigError(String),
    /// Some inputs could not be split
    RunsFailed {
        /// Number of failed runs
        failed: usize,
        /// Number of attempted runs
        total: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoFilesMatched(patterns) => {
                write!(f, "No files found matching: {patterns}")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::RunsFailed { failed, total } => {
                write!(f, "{failed} of {total} input file(s) failed")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
