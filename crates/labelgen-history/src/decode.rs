//! Best-effort conversion of diff bytes into text.

/// Decode `bytes` as UTF-8, dropping any invalid sequences.
///
/// Keyword matching only needs approximate text, so malformed input is
/// skipped instead of replaced; `"fire\xFFbase"` still reads as `firebase`.
///
/// # Examples
///
/// ```
/// use labelgen_history::decode::decode_lossy;
///
/// assert_eq!(decode_lossy(b"+<div class=\"modal\">"), "+<div class=\"modal\">");
/// assert_eq!(decode_lossy(b"fire\xFFbase"), "firebase");
/// ```
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
