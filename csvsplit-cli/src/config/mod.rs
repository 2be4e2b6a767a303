//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use csvsplit_core::{DEFAULT_ENCODING, DEFAULT_SPLIT_COUNT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Split configuration
    #[serde(default)]
    pub split: SplitSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Split-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SplitSection {
    /// Number of part files
    pub split_count: i64,

    /// Repeat the first unique line at the top of every part
    pub include_header: bool,

    /// Encoding label for reading and writing
    pub encoding: String,

    /// Output directory (default: next to each input)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for SplitSection {
    fn default() -> Self {
        Self {
            split_count: DEFAULT_SPLIT_COUNT as i64,
            include_header: true,
            encoding: DEFAULT_ENCODING.to_string(),
            output_dir: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// Report format
    pub format: OutputFormat,

    /// Suppress progress and log output
    pub quiet: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            quiet: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `path` if given, otherwise fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.split.split_count, 10);
        assert!(config.split.include_header);
        assert_eq!(config.split.encoding, "utf-8");
        assert_eq!(config.split.output_dir, None);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.quiet);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml(
            r#"
[split]
split_count = 4
"#,
        )
        .unwrap();

        assert_eq!(config.split.split_count, 4);
        assert!(config.split.include_header);
        assert_eq!(config.output, OutputSection::default());
    }

    #[test]
    fn test_full_file() {
        let config = CliConfig::from_toml(
            r#"
[split]
split_count = 3
include_header = false
encoding = "gbk"
output_dir = "parts"

[output]
format = "json"
quiet = true
"#,
        )
        .unwrap();

        assert_eq!(config.split.split_count, 3);
        assert!(!config.split.include_header);
        assert_eq!(config.split.encoding, "gbk");
        assert_eq!(config.split.output_dir, Some(PathBuf::from("parts")));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.quiet);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = CliConfig::from_toml("[split]\nsplits = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_reports_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[output]\nformat = \"yaml\"\n").unwrap();

        let err = CliConfig::from_file(temp_file.path()).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_err, CliError::ConfigError(_)));
        assert!(err
            .to_string()
            .contains(&temp_file.path().display().to_string()));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }
}
