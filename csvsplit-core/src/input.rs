//! Whole-file reading and strict decoding

use crate::error::{Result, SplitError};
use crate::writer::encode;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::fs;
use std::path::Path;

/// Decoded file contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Text without the byte order mark
    pub text: String,
    /// Encoding the bytes were actually decoded with
    ///
    /// Differs from the declared one only when a UTF-16 byte order mark
    /// names the other byte order.
    pub encoding: &'static Encoding,
    /// Whether the input started with a byte order mark
    pub had_bom: bool,
}

/// Read `path` completely and decode it as `encoding`
///
/// Malformed byte sequences fail the read instead of being replaced, and so
/// do characters that decode but cannot be written back in `encoding`.
pub fn read_text(path: &Path, encoding: &'static Encoding) -> Result<DecodedText> {
    let bytes = fs::read(path).map_err(|e| SplitError::from_io(e, path))?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    decode(&bytes, encoding).ok_or_else(|| SplitError::DecodingError {
        path: path.to_path_buf(),
        encoding: encoding.name().to_string(),
    })
}

/// Strictly decode `bytes`; `None` if they are not valid in `encoding`
///
/// A leading byte order mark is dropped when it belongs to `encoding`. For
/// UTF-16 a mark of the other byte order switches the decoder to it.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> Option<DecodedText> {
    let (encoding, body, had_bom) = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_len))
            if bom_encoding == encoding || (is_utf16(encoding) && is_utf16(bom_encoding)) =>
        {
            (bom_encoding, &bytes[bom_len..], true)
        }
        _ => (encoding, bytes, false),
    };

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(body)?
        .into_owned();

    // GBK decodes four-byte GB18030 sequences it cannot encode again
    if !is_unicode(encoding) && encode(&text, encoding).is_none() {
        return None;
    }

    Some(DecodedText {
        text,
        encoding,
        had_bom,
    })
}

/// Split decoded text into physical lines
///
/// `\n`, `\r\n` and a lone `\r` all end a line; a final terminator does not
/// produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' => {
                lines.push(&text[start..pos]);
                pos += 1;
                start = pos;
            }
            b'\r' => {
                lines.push(&text[start..pos]);
                pos += if bytes.get(pos + 1) == Some(&b'\n') { 2 } else { 1 };
                start = pos;
            }
            _ => pos += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

fn is_utf16(encoding: &'static Encoding) -> bool {
    encoding == UTF_16LE || encoding == UTF_16BE
}

fn is_unicode(encoding: &'static Encoding) -> bool {
    encoding == UTF_8 || is_utf16(encoding)
}
