//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use csvsplit_core::{DEFAULT_ENCODING, DEFAULT_SPLIT_COUNT};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to set your defaults");
        println!("2. Use it for splitting:");
        println!(
            "   csvsplit split -i records.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# csvsplit configuration
# Command-line flags take precedence over the values below.

[split]
# Number of part files to produce (must be greater than 0)
split_count = {DEFAULT_SPLIT_COUNT}

# Repeat the first unique line at the top of every part file.
# When false, the first line is treated as ordinary data.
include_header = true

# Encoding used to read the input and write the parts
# (any WHATWG label: "utf-8", "gbk", "shift_jis", "windows-1252", ...)
encoding = "{DEFAULT_ENCODING}"

# Directory for the part files; it must already exist.
# Leave unset to write next to each input file.
# output_dir = "parts"

[output]
# Report format: "text" or "json"
format = "text"

# Suppress progress bar and log output
quiet = false
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("csvsplit.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("csvsplit.toml"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("csvsplit.toml"),
        };

        let template = args.generate_template();
        let config = CliConfig::from_toml(&template).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("csvsplit.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[split]"));
        assert!(content.contains("split_count = 10"));
    }

    #[test]
    fn test_execute_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let args = GenerateConfigArgs {
            output: temp_dir.path().join("missing").join("csvsplit.toml"),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
