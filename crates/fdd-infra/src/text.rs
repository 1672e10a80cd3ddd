//! Decoding of text files saved by spreadsheet tools

use encoding_rs::SHIFT_JIS;

/// Decode file bytes as UTF-8, falling back to CP932 (Shift-JIS).
///
/// A leading UTF-8 BOM is dropped.
pub(crate) fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    let (decoded, _, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        eprintln!("Warning: Some characters could not be decoded from CP932");
    }
    decoded.into_owned()
}
