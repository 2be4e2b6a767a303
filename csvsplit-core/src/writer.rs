//! Part file writing

use crate::error::{Result, SplitError};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes part files in a fixed encoding
#[derive(Debug, Clone, Copy)]
pub struct PartWriter {
    encoding: &'static Encoding,
    bom: bool,
}

impl PartWriter {
    /// Create a writer that encodes output as `encoding`
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            bom: false,
        }
    }

    /// Start every part with the byte order mark of the encoding
    ///
    /// Ignored for encodings that have no byte order mark.
    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    /// Write `header` (if any) followed by `lines` to `path`
    ///
    /// Every line is terminated with `\n`. An existing file at `path` is
    /// truncated. The output directory must already exist. Nothing is
    /// written when the content cannot be represented in the encoding.
    pub fn write_part<S: AsRef<str>>(
        &self,
        path: &Path,
        header: Option<&str>,
        lines: &[S],
    ) -> Result<()> {
        let mut content = String::new();
        if let Some(header) = header {
            content.push_str(header);
            content.push('\n');
        }
        for line in lines {
            content.push_str(line.as_ref());
            content.push('\n');
        }

        let mut bytes = if self.bom {
            bom(self.encoding).to_vec()
        } else {
            Vec::new()
        };
        match encode(&content, self.encoding) {
            Some(encoded) => bytes.extend_from_slice(&encoded),
            None => {
                return Err(SplitError::UnexpectedError {
                    path: path.to_path_buf(),
                    source: io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("content cannot be encoded as {}", self.encoding.name()),
                    ),
                })
            }
        }

        let file = File::create(path).map_err(|e| SplitError::from_io(e, path))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&bytes)
            .and_then(|_| writer.flush())
            .map_err(|e| SplitError::from_io(e, path))?;

        log::trace!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

/// Encode `text` as `encoding`; `None` if a character has no mapping
///
/// `encoding_rs` only encodes to ASCII-compatible encodings, so UTF-16 is
/// produced by hand to keep the output in the same encoding as the input.
pub fn encode(text: &str, encoding: &'static Encoding) -> Option<Vec<u8>> {
    if encoding == UTF_16LE {
        Some(text.encode_utf16().flat_map(u16::to_le_bytes).collect())
    } else if encoding == UTF_16BE {
        Some(text.encode_utf16().flat_map(u16::to_be_bytes).collect())
    } else {
        let (bytes, _, had_unmappable) = encoding.encode(text);
        (!had_unmappable).then(|| bytes.into_owned())
    }
}

/// Byte order mark of `encoding`, empty if it has none
pub fn bom(encoding: &'static Encoding) -> &'static [u8] {
    if encoding == UTF_8 {
        b"\xEF\xBB\xBF"
    } else if encoding == UTF_16LE {
        b"\xFF\xFE"
    } else if encoding == UTF_16BE {
        b"\xFE\xFF"
    } else {
        b""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{GBK, SHIFT_JIS};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_with_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out_part001.csv");

        PartWriter::new(UTF_8)
            .write_part(&path, Some("id,name"), &["1,a", "2,b"])
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "id,name\n1,a\n2,b\n");
    }

    #[test]
    fn test_write_without_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out_part001.csv");

        PartWriter::new(UTF_8)
            .write_part(&path, None, &["1,a".to_string()])
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1,a\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out_part001.csv");
        fs::write(&path, "stale content that is longer\n").unwrap();

        PartWriter::new(UTF_8).write_part(&path, None, &["x"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "x\n");
    }

    #[test]
    fn test_missing_directory_is_not_created() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out_part001.csv");

        let err = PartWriter::new(UTF_8)
            .write_part(&path, None, &["x"])
            .unwrap_err();

        assert!(matches!(err, SplitError::FileNotFound { .. }));
        assert!(!temp_dir.path().join("missing").exists());
    }

    #[test]
    fn test_shift_jis_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sjis_part001.txt");

        PartWriter::new(SHIFT_JIS)
            .write_part(&path, Some("名前"), &["東京"])
            .unwrap();

        let bytes = fs::read(&path).unwrap();
        let (decoded, _, had_errors) = SHIFT_JIS.decode(&bytes);
        assert!(!had_errors);
        assert_eq!(decoded, "名前\n東京\n");
    }

    #[test]
    fn test_encode_utf16() {
        assert_eq!(encode("a\n", UTF_16LE), Some(vec![b'a', 0, b'\n', 0]));
        assert_eq!(encode("a\n", UTF_16BE), Some(vec![0, b'a', 0, b'\n']));
    }

    #[test]
    fn test_encode_unmappable_character() {
        assert_eq!(encode("\u{20000}", GBK), None);
        assert_eq!(encode("caf\u{e9}", SHIFT_JIS), None);
        assert!(encode("编号", GBK).is_some());
    }

    #[test]
    fn test_unencodable_part_is_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gbk_part001.txt");

        let err = PartWriter::new(GBK)
            .write_part(&path, Some("h"), &["\u{20000}"])
            .unwrap_err();

        match err {
            SplitError::UnexpectedError { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
                assert!(source.to_string().contains("GBK"));
            }
            other => panic!("expected UnexpectedError, got {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_bom_written_when_requested() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("be_part001.txt");

        PartWriter::new(UTF_16BE)
            .with_bom(true)
            .write_part(&path, None, &["a"])
            .unwrap();

        assert_eq!(fs::read(&path).unwrap(), vec![0xFE, 0xFF, 0, b'a', 0, b'\n']);
    }

    #[test]
    fn test_bom_ignored_for_legacy_encoding() {
        assert!(bom(SHIFT_JIS).is_empty());
        assert_eq!(bom(UTF_8), b"\xEF\xBB\xBF");
    }
}
