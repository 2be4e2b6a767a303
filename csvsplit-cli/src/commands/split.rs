//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::output::{JsonFormatter, OutputFormat, ReportFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use csvsplit_core::config::{resolve_encoding, validate_split_count};
use csvsplit_core::{SplitConfig, SplitReport, Splitter};
use std::io;
use std::path::{Path, PathBuf};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output directory (default: directory of each input file)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of part files to produce
    #[arg(short = 'n', long, value_name = "COUNT", allow_negative_numbers = true)]
    pub split_count: Option<i64>,

    /// Repeat the first unique line as a header (overrides the config file)
    #[arg(long, overrides_with = "no_header")]
    pub header: bool,

    /// Treat the first line as ordinary data instead of a header
    #[arg(long, overrides_with = "header")]
    pub no_header: bool,

    /// Text encoding used for reading and writing
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CSVSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSettings {
    pub output_dir: Option<PathBuf>,
    pub split_count: i64,
    pub include_header: bool,
    pub encoding: String,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        let file_config = CliConfig::load(self.config.as_deref())?;
        let settings = self.resolve(&file_config);

        // Initialize logging based on verbosity
        self.init_logging(settings.quiet);

        log::info!("Starting deduplicate and split");
        log::debug!("Arguments: {:?}", self);
        log::debug!("Settings: {:?}", settings);

        // Reject bad settings before touching the filesystem
        validate_split_count(settings.split_count)?;
        resolve_encoding(&settings.encoding)?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Resolved {} input file(s)", files.len());

        let mut formatter: Box<dyn ReportFormatter> = match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::stdio()),
            OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout())),
        };
        let show_progress = !settings.quiet && settings.format == OutputFormat::Text;

        let mut failed = 0;
        for file in &files {
            match run_one(file, &settings, show_progress) {
                Ok(report) => formatter.format_report(&report)?,
                Err(error) => {
                    log::debug!("{} failed: {:?}", file.display(), error);
                    formatter.format_failure(file, &error)?;
                    failed += 1;
                }
            }
        }
        formatter.finish()?;

        if failed > 0 {
            return Err(CliError::RunsFailed {
                failed,
                total: files.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Merge command-line flags over the configuration file
    pub fn resolve(&self, file_config: &CliConfig) -> SplitSettings {
        let split = &file_config.split;
        SplitSettings {
            output_dir: self
                .output_dir
                .clone()
                .or_else(|| split.output_dir.clone()),
            split_count: self.split_count.unwrap_or(split.split_count),
            include_header: if self.header {
                true
            } else if self.no_header {
                false
            } else {
                split.include_header
            },
            encoding: self
                .encoding
                .clone()
                .unwrap_or_else(|| split.encoding.clone()),
            format: self.format.unwrap_or(file_config.output.format),
            quiet: self.quiet || file_config.output.quiet,
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self, quiet: bool) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Split a single input file
fn run_one(
    input: &Path,
    settings: &SplitSettings,
    show_progress: bool,
) -> csvsplit_core::Result<SplitReport> {
    let config = SplitConfig::builder(input)
        .output_dir(settings.output_dir.clone())
        .split_count(settings.split_count)
        .include_header(settings.include_header)
        .encoding(settings.encoding.as_str())
        .build()?;

    let mut progress = ProgressReporter::new(!show_progress);
    let result = Splitter::new(config).run_with_progress(&mut progress);
    progress.finish();
    result
}
