use samsalvage::text::{decode_ascii_lossy, extract_text};

#[test]
fn test_extract_text_hello_world_padded() {
    let mut data = vec![0x00, 0x01, 0xFE, 0x07];
    data.extend_from_slice(b"Hello World");
    data.extend_from_slice(&[0xFF, 0x02, 0x1B]);
    assert_eq!(extract_text(&data), "Hello World");
}

#[test]
fn test_extract_text_keeps_interior_newlines() {
    let data = b"line one\nline two\r\n";
    assert_eq!(extract_text(data), "line one\nline two");
}

#[test]
fn test_extract_text_fuses_runs_without_separator() {
    let data = b"abc\x00\x00\x01def";
    assert_eq!(extract_text(data), "abcdef");
}

#[test]
fn test_extract_text_empty_buffer() {
    assert_eq!(extract_text(&[]), "");
}

#[test]
fn test_extract_text_all_binary_buffer() {
    let data = [0x00, 0x01, 0x02, 0x90, 0xFF, 0x08];
    assert_eq!(extract_text(&data), "");
}

#[test]
fn test_extract_text_output_charset() {
    let data: Vec<u8> = (0u8..=255u8).collect();
    let out = extract_text(&data);
    assert!(out.chars().all(|c| matches!(c, ' '..='~' | '\n' | '\r')));
}

#[test]
fn test_extract_text_idempotent() {
    let data: Vec<u8> = (0..4096)
        .map(|i: u32| (i.wrapping_mul(131).wrapping_add(17) % 256) as u8)
        .collect();
    assert_eq!(extract_text(&data), extract_text(&data));
}

#[test]
fn test_decode_ascii_lossy_drops_high_bytes_only() {
    let data = [b'a', 0x80, 0xFF, b'b', 0x7F];
    assert_eq!(decode_ascii_lossy(&data), "ab\x7f");
}

#[test]
fn test_decode_ascii_lossy_keeps_control_bytes() {
    // Control chars survive the decode; only the printable filter in
    // extract_text removes them.
    let data = [0x01, b'x', 0x02];
    assert_eq!(decode_ascii_lossy(&data), "\u{1}x\u{2}");
}
