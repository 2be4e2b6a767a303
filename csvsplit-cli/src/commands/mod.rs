//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod split;

/// Encoding labels shown by `list encodings`
pub const COMMON_ENCODINGS: &[(&str, &str)] = &[
    ("utf-8", "Unicode, default"),
    ("utf-16le", "Unicode, little-endian"),
    ("utf-16be", "Unicode, big-endian"),
    ("gbk", "Simplified Chinese"),
    ("gb18030", "Simplified Chinese"),
    ("big5", "Traditional Chinese"),
    ("shift_jis", "Japanese"),
    ("euc-jp", "Japanese"),
    ("euc-kr", "Korean"),
    ("windows-1252", "Western European"),
    ("iso-8859-1", "Western European (alias of windows-1252)"),
    ("windows-1251", "Cyrillic"),
];

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Deduplicate lines and split them into even part files
    Split(split::SplitArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List commonly used encoding labels
    Encodings,

    /// List available report formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested list
    pub fn execute(&self) {
        match self {
            ListCommands::Encodings => {
                println!("Common encodings (any WHATWG label is accepted):");
                for (label, description) in COMMON_ENCODINGS {
                    println!("  {label:<14} {description}");
                }
            }
            ListCommands::Formats => {
                println!("Report formats:");
                for format in OutputFormat::ALL {
                    println!("  {}", format.as_str());
                }
            }
        }
    }
}
