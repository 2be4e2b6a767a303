//! Part file naming

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Stem and extension of an input file, used to derive part file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartNamer {
    stem: OsString,
    extension: OsString,
}

impl PartNamer {
    /// Derive stem and extension from the file name of `input`
    ///
    /// The last dot starts the extension (kept with its dot); a leading dot
    /// belongs to the stem, so `.env` has no extension.
    pub fn from_input(input: &Path) -> Self {
        let stem = input
            .file_stem()
            .map(OsStr::to_os_string)
            .unwrap_or_default();

        let extension = match input.extension() {
            Some(ext) => {
                let mut dotted = OsString::from(".");
                dotted.push(ext);
                dotted
            }
            None => OsString::new(),
        };

        Self { stem, extension }
    }

    /// File name for the zero-based partition `index`
    ///
    /// `records.txt`, index 0 → `records_part001.txt`
    pub fn file_name(&self, index: usize) -> OsString {
        let mut name = self.stem.clone();
        name.push(format!("_part{:03}", index + 1));
        name.push(&self.extension);
        name
    }
}
