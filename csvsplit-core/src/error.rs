//! Error taxonomy for a split run

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a split run
///
/// Every variant is recoverable from the caller's point of view: the run
/// stops, nothing already written is rolled back, and the caller decides how
/// to report it.
#[derive(Error, Debug)]
pub enum SplitError {
    /// Rejected configuration, detected before any I/O happens
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input file (or output directory) does not exist
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found
        path: PathBuf,
    },

    /// Missing read permission on the input or write permission on the output
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// Path that could not be accessed
        path: PathBuf,
    },

    /// Input bytes are not valid in the declared encoding
    #[error("{} is not valid {encoding}; check the file encoding or pass the correct one", path.display())]
    DecodingError {
        /// File that failed to decode
        path: PathBuf,
        /// Name of the declared encoding
        encoding: String,
    },

    /// Anything else, with the underlying error kept as the source
    #[error("unexpected error on {}: {source}", path.display())]
    UnexpectedError {
        /// Path being accessed when the failure happened
        path: PathBuf,
        /// Original I/O error
        #[source]
        source: io::Error,
    },
}

/// Stable, matchable label for a [`SplitError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ErrorKind {
    /// Split count or encoding rejected before any file access
    InvalidConfiguration,
    /// Input file or output directory does not exist
    FileNotFound,
    /// Input or output file is not accessible
    PermissionDenied,
    /// Input bytes are not valid in the declared encoding
    DecodingError,
    /// Any other I/O failure, including unencodable output
    UnexpectedError,
}

impl SplitError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => SplitError::FileNotFound { path },
            io::ErrorKind::PermissionDenied => SplitError::PermissionDenied { path },
            _ => SplitError::UnexpectedError { path, source: err },
        }
    }

    /// Label of this error within the taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            SplitError::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            SplitError::FileNotFound { .. } => ErrorKind::FileNotFound,
            SplitError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            SplitError::DecodingError { .. } => ErrorKind::DecodingError,
            SplitError::UnexpectedError { .. } => ErrorKind::UnexpectedError,
        }
    }
}

/// Result type for split operations
pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_from_io_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let split_err = SplitError::from_io(err, Path::new("data.txt"));

        assert_eq!(split_err.kind(), ErrorKind::FileNotFound);
        assert_eq!(split_err.to_string(), "file not found: data.txt");
    }

    #[test]
    fn test_from_io_permission_denied() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let split_err = SplitError::from_io(err, Path::new("/root/out"));

        assert_eq!(split_err.kind(), ErrorKind::PermissionDenied);
        assert!(split_err.to_string().contains("/root/out"));
    }

    #[test]
    fn test_from_io_other_keeps_source() {
        let err = io::Error::new(io::ErrorKind::Other, "disk on fire");
        let split_err = SplitError::from_io(err, Path::new("data.txt"));

        assert_eq!(split_err.kind(), ErrorKind::UnexpectedError);
        let source = split_err.source().expect("source should be kept");
        assert_eq!(source.to_string(), "disk on fire");
    }

    #[test]
    fn test_decoding_error_display() {
        let err = SplitError::DecodingError {
            path: PathBuf::from("records.txt"),
            encoding: "UTF-8".to_string(),
        };
        assert!(err.to_string().starts_with("records.txt is not valid UTF-8"));
        assert_eq!(err.kind(), ErrorKind::DecodingError);
    }

    #[test]
    fn test_invalid_configuration_display() {
        let err = SplitError::InvalidConfiguration("split count must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: split count must be greater than 0"
        );
    }
}
