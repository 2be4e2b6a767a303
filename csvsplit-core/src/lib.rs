//! Line deduplication and even splitting for CSV text exports
//!
//! Rows are treated as opaque lines: the whole file is read into memory,
//! repeated lines (compared after trimming) are dropped while keeping
//! first-occurrence order, an optional header line is peeled off, and the
//! remaining lines are spread over N part files whose sizes differ by at
//! most one line.
//!
//! # Example
//!
//! ```rust,no_run
//! use csvsplit_core::{SplitConfig, Splitter};
//!
//! let config = SplitConfig::builder("filtered_records.txt")
//!     .split_count(10)
//!     .include_header(true)
//!     .encoding("utf-8")
//!     .build()?;
//!
//! let report = Splitter::new(config).run()?;
//! println!("{} duplicates removed", report.duplicate_count);
//! for part in &report.parts {
//!     println!("{} ({} lines)", part.file_name, part.total_lines);
//! }
//! # Ok::<(), csvsplit_core::SplitError>(())
//! ```

pub mod config;
pub mod dedup;
pub mod error;
pub mod input;
pub mod naming;
pub mod partition;
pub mod report;
pub mod splitter;
pub mod writer;

pub use config::{SplitConfig, SplitConfigBuilder, DEFAULT_ENCODING, DEFAULT_SPLIT_COUNT};
pub use dedup::{deduplicate, Deduplicated};
pub use error::{ErrorKind, Result, SplitError};
pub use input::DecodedText;
pub use partition::{Partition, PartitionPlan};
pub use report::{PartReport, SplitOutcome, SplitReport};
pub use splitter::{split_file, NoProgress, SplitProgress, Splitter};
