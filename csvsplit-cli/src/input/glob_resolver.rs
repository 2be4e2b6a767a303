//! Input pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

/// Resolve input arguments to file paths
///
/// Arguments without glob metacharacters are passed through untouched so a
/// missing file reaches the splitter and is reported as not found.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if !is_glob_pattern(pattern) {
            files.push(PathBuf::from(pattern));
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path = path_result
                .map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

            if path.is_file() {
                matched.push(path);
            }
        }
        matched.sort();
        files.extend(matched);
    }

    if files.is_empty() {
        return Err(CliError::NoFilesMatched(patterns.join(", ")).into());
    }

    // Keep first occurrence when patterns overlap
    let mut seen = std::collections::HashSet::new();
    files.retain(|path| seen.insert(path.clone()));

    Ok(files)
}

fn is_glob_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, tail: &str) -> String {
        dir.path().join(tail).to_string_lossy().into_owned()
    }

    #[test]
    fn test_literal_path_passes_through_even_if_missing() {
        let files = resolve_patterns(&["missing.csv".to_string()]).unwrap();
        assert_eq!(files, vec![PathBuf::from("missing.csv")]);
    }

    #[test]
    fn test_glob_matches_sorted_files_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "x").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "x").unwrap();
        fs::write(temp_dir.path().join("c.csv"), "x").unwrap();
        fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();

        let files = resolve_patterns(&[pattern(&temp_dir, "*.txt")]).unwrap();
        assert_eq!(
            files,
            vec![temp_dir.path().join("a.txt"), temp_dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_overlapping_patterns_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "x").unwrap();

        let files = resolve_patterns(&[
            pattern(&temp_dir, "*.txt"),
            pattern(&temp_dir, "a.txt"),
        ])
        .unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_glob_without_matches_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern(&temp_dir, "*.none")]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
