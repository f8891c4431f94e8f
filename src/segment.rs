//! Coarse binary structure for manual inspection: fixed-size windows kept
//! when anything human-relevant decodes out of them, plus a hex preview of
//! the leading bytes.

use crate::text::decode_ascii_lossy;
use crate::types::TextSegment;

/// Partitions the buffer into consecutive `chunk_size` windows (the final
/// one may be short) and keeps each window that decodes to at least one
/// printable character; whitespace counts. Dropped windows leave no
/// placeholder. Indices are 1-based over the retained segments.
pub fn segment(buffer: &[u8], chunk_size: usize) -> Vec<TextSegment> {
    let mut segments = Vec::new();

    for chunk in buffer.chunks(chunk_size) {
        let decoded = decode_ascii_lossy(chunk);
        if !decoded
            .chars()
            .any(|c| c.is_ascii_graphic() || c.is_ascii_whitespace())
        {
            continue;
        }

        segments.push(TextSegment {
            index: segments.len() + 1,
            text: decoded.trim().to_string(),
        });
    }

    segments
}

/// Lowercase hex of the first `max_bytes` bytes, for display only.
pub fn hex_preview(buffer: &[u8], max_bytes: usize) -> String {
    hex::encode(&buffer[..buffer.len().min(max_bytes)])
}
