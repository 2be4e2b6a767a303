//! csvsplit CLI library
//!
//! This library provides the command-line interface for deduplicating
//! CSV text exports and splitting them into even part files.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
