//! Split configuration and its builder

use crate::error::{Result, SplitError};
use encoding_rs::{Encoding, UTF_8};
use std::path::{Path, PathBuf};

/// Default number of output parts
pub const DEFAULT_SPLIT_COUNT: usize = 10;

/// Default encoding label
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Validated configuration for one split run
///
/// Built through [`SplitConfig::builder`]; once built, every value has been
/// checked, so a run never fails on configuration after it starts reading.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    input: PathBuf,
    output_dir: PathBuf,
    split_count: usize,
    include_header: bool,
    encoding: &'static Encoding,
}

impl SplitConfig {
    /// Create a builder for `input`
    pub fn builder(input: impl Into<PathBuf>) -> SplitConfigBuilder {
        SplitConfigBuilder::new(input)
    }

    /// Input file path
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Directory the part files are written into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Number of partitions
    pub fn split_count(&self) -> usize {
        self.split_count
    }

    /// Whether the first unique line is repeated at the top of every part
    pub fn include_header(&self) -> bool {
        self.include_header
    }

    /// Encoding used for reading and writing
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

/// Builder for [`SplitConfig`]
#[derive(Debug, Clone)]
pub struct SplitConfigBuilder {
    input: PathBuf,
    output_dir: Option<PathBuf>,
    split_count: i64,
    include_header: bool,
    encoding: String,
}

impl SplitConfigBuilder {
    /// Start from the defaults for `input`
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            split_count: DEFAULT_SPLIT_COUNT as i64,
            include_header: true,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }

    /// Set the output directory (default: the input's directory)
    pub fn output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    /// Set the number of partitions
    ///
    /// Zero and negative counts are accepted here and rejected by `build`.
    pub fn split_count(mut self, count: i64) -> Self {
        self.split_count = count;
        self
    }

    /// Enable or disable header extraction
    pub fn include_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Set the encoding by WHATWG label (`utf-8`, `gbk`, `shift_jis`, ...)
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<SplitConfig> {
        let split_count = validate_split_count(self.split_count)?;

        if self.input.as_os_str().is_empty() {
            return Err(SplitError::InvalidConfiguration(
                "input path must not be empty".to_string(),
            ));
        }

        let encoding = resolve_encoding(&self.encoding)?;

        let output_dir = match self.output_dir {
            Some(dir) => dir,
            None => default_output_dir(&self.input),
        };

        Ok(SplitConfig {
            input: self.input,
            output_dir,
            split_count,
            include_header: self.include_header,
            encoding,
        })
    }
}

/// Check that `count` is a usable number of partitions
pub fn validate_split_count(count: i64) -> Result<usize> {
    if count <= 0 {
        return Err(SplitError::InvalidConfiguration(format!(
            "split count must be greater than 0, got {count}"
        )));
    }
    usize::try_from(count).map_err(|_| {
        SplitError::InvalidConfiguration(format!("split count {count} is too large"))
    })
}

/// Look up an encoding by label
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    if label.trim().is_empty() {
        return Ok(UTF_8);
    }
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| SplitError::InvalidConfiguration(format!("unknown encoding: {label}")))
}

fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
