//! Printable-text extraction.

/// Lossy decode policy: the buffer is read as single-byte ASCII and every
/// byte outside that range is dropped silently, never reported.
pub fn decode_ascii_lossy(buffer: &[u8]) -> String {
    buffer
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect()
}

/// Filters the buffer down to printable ASCII plus newline/carriage-return
/// and trims the ends. This is a character-class filter, so unrelated
/// adjacent text runs fuse with no separator between them.
pub fn extract_text(buffer: &[u8]) -> String {
    let filtered: String = decode_ascii_lossy(buffer)
        .chars()
        .filter(|&c| is_salvageable(c))
        .collect();

    filtered.trim().to_string()
}

#[inline]
fn is_salvageable(c: char) -> bool {
    matches!(c, ' '..='~' | '\n' | '\r')
}
