//! Progress reporting module

use csvsplit_core::{PartReport, PartitionPlan, SplitProgress};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for part file writing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for part file writing
    pub fn init_parts(&mut self, total_parts: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_parts);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} parts {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a written part
    pub fn part_completed(&self, file_name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Wrote: {file_name}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting and clear the bar
    pub fn finish(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
    }
}

impl SplitProgress for ProgressReporter {
    fn on_plan(&mut self, plan: &PartitionPlan) {
        self.init_parts(plan.non_empty_count() as u64);
    }

    fn on_part_written(&mut self, part: &PartReport) {
        self.part_completed(&part.file_name);
    }
}
