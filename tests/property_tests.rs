use proptest::prelude::*;
use samsalvage::carving::{carve, find_all};
use samsalvage::segment::segment;
use samsalvage::text::{decode_ascii_lossy, extract_text};

proptest! {
    #[test]
    fn extract_text_charset_and_order(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let out = extract_text(&data);
        prop_assert!(out.chars().all(|c| matches!(c, ' '..='~' | '\n' | '\r')));

        // Order-preserving subsequence of the input bytes.
        let mut bytes = data.iter();
        for ch in out.chars() {
            prop_assert!(bytes.any(|&b| b == ch as u8));
        }
    }

    #[test]
    fn decode_ascii_lossy_is_ascii_subsequence(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let out = decode_ascii_lossy(&data);
        prop_assert!(out.chars().all(|c| c.is_ascii()));

        let mut bytes = data.iter();
        for ch in out.chars() {
            prop_assert!(bytes.any(|&b| b == ch as u8));
        }
    }

    #[test]
    fn find_all_offsets_match(
        data in proptest::collection::vec(any::<u8>(), 0..2048),
        pattern in proptest::collection::vec(any::<u8>(), 1..4),
    ) {
        for offset in find_all(&data, &pattern) {
            prop_assert_eq!(&data[offset..offset + pattern.len()], pattern.as_slice());
        }
    }

    #[test]
    fn find_all_offsets_ascend(
        data in proptest::collection::vec(any::<u8>(), 0..2048),
        pattern in proptest::collection::vec(any::<u8>(), 1..4),
    ) {
        let offsets = find_all(&data, &pattern);
        prop_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn carve_bounds_are_sane(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        for image in carve(&data) {
            prop_assert!(image.start < image.end);
            prop_assert!(image.end <= data.len());
        }
    }

    #[test]
    fn carve_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(carve(&data), carve(&data));
    }

    #[test]
    fn segment_never_exceeds_window_count(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let segments = segment(&data, 100);
        prop_assert!(segments.len() <= data.len().div_ceil(100));

        for seg in &segments {
            prop_assert!(seg.text.chars().all(|c| c.is_ascii()));
        }
    }
}
