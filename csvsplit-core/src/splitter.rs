//! Deduplicate-then-split orchestration

use crate::config::SplitConfig;
use crate::dedup::deduplicate;
use crate::error::Result;
use crate::input::{read_text, split_lines};
use crate::naming::PartNamer;
use crate::partition::PartitionPlan;
use crate::report::{PartReport, SplitOutcome, SplitReport};
use crate::writer::PartWriter;

/// Observer for a running split
///
/// All methods default to no-ops.
pub trait SplitProgress {
    /// Called once the plan is known, before any file is written
    fn on_plan(&mut self, _plan: &PartitionPlan) {}

    /// Called after each part file has been written
    fn on_part_written(&mut self, _part: &PartReport) {}
}

/// Progress observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl SplitProgress for NoProgress {}

/// Runs one split described by a [`SplitConfig`]
#[derive(Debug, Clone)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// Create a splitter for `config`
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Configuration this splitter runs with
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Run without progress reporting
    pub fn run(&self) -> Result<SplitReport> {
        self.run_with_progress(&mut NoProgress)
    }

    /// Read, deduplicate, partition and write, reporting to `progress`
    ///
    /// Part files written before a failure are left in place.
    pub fn run_with_progress<P: SplitProgress + ?Sized>(
        &self,
        progress: &mut P,
    ) -> Result<SplitReport> {
        let config = &self.config;
        log::info!(
            "splitting {} into {} parts (header: {}, encoding: {})",
            config.input().display(),
            config.split_count(),
            config.include_header(),
            config.encoding().name()
        );

        let decoded = read_text(config.input(), config.encoding())?;
        if decoded.encoding != config.encoding() {
            log::info!(
                "byte order mark selects {} for {}",
                decoded.encoding.name(),
                config.input().display()
            );
        }
        let deduped = deduplicate(split_lines(&decoded.text));
        log::info!(
            "{} lines read, {} unique, {} duplicates removed, {} blank",
            deduped.original_count,
            deduped.unique_count(),
            deduped.duplicate_count,
            deduped.blank_count
        );

        let unique_count = deduped.unique_count();
        let (header, data) = match deduped.lines.split_first() {
            Some((first, rest)) if config.include_header() => (Some(first.as_str()), rest),
            _ => (None, deduped.lines.as_slice()),
        };

        let plan = PartitionPlan::new(data.len(), config.split_count());
        let mut report = SplitReport {
            input: config.input().to_path_buf(),
            output_dir: config.output_dir().to_path_buf(),
            encoding: decoded.encoding.name().to_string(),
            original_count: deduped.original_count,
            unique_count,
            duplicate_count: deduped.duplicate_count,
            blank_count: deduped.blank_count,
            header: header.map(str::to_string),
            data_count: data.len(),
            split_count: config.split_count(),
            base_lines_per_part: plan.base(),
            parts_with_extra_line: plan.extra(),
            parts: Vec::with_capacity(plan.non_empty_count()),
            outcome: SplitOutcome::Completed,
        };

        if data.is_empty() {
            log::warn!("no data to split in {}", config.input().display());
            report.outcome = SplitOutcome::NoData;
            return Ok(report);
        }

        progress.on_plan(&plan);

        let namer = PartNamer::from_input(config.input());
        let writer = PartWriter::new(decoded.encoding).with_bom(decoded.had_bom);
        let header_lines = usize::from(header.is_some());

        for partition in plan.non_empty() {
            let file_name = namer.file_name(partition.index);
            let path = config.output_dir().join(&file_name);

            writer.write_part(&path, header, &data[partition.range()])?;

            let part = PartReport {
                index: partition.index,
                file_name: file_name.to_string_lossy().into_owned(),
                path,
                data_lines: partition.len,
                total_lines: partition.len + header_lines,
            };
            log::debug!("created {} ({} lines)", part.file_name, part.total_lines);
            progress.on_part_written(&part);
            report.parts.push(part);
        }

        log::info!(
            "created {} files in {}",
            report.files_created(),
            config.output_dir().display()
        );
        Ok(report)
    }
}

/// Run a split for `config` without progress reporting
pub fn split_file(config: SplitConfig) -> Result<SplitReport> {
    Splitter::new(config).run()
}
