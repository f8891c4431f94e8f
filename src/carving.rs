//! Signature-driven carving of embedded images.
//!
//! Every object is delimited locally: a start marker is paired with the
//! nearest following end marker of its own family, so a missing terminator
//! never produces a runaway span. The range between a pair is taken as-is
//! and may cross an object of a different format that happens to sit
//! between the two markers; that limitation is accepted rather than
//! special-cased.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use memchr::memmem;

use crate::formats::SIGNATURES;
use crate::types::{CarvedImage, Offset};

// Start markers for every signature family, compiled once. Pattern ids
// follow SIGNATURES declaration order.
static START_MARKERS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new(SIGNATURES.iter().map(|s| s.start))
        .expect("signature table holds valid non-empty patterns")
});

/// Every offset where `pattern` occurs in `buffer`, ascending. Overlapping
/// occurrences are all reported.
pub fn find_all(buffer: &[u8], pattern: &[u8]) -> Vec<Offset> {
    if pattern.is_empty() || pattern.len() > buffer.len() {
        return Vec::new();
    }

    let finder = memmem::Finder::new(pattern);
    let mut offsets = Vec::new();
    let mut pos = 0;

    // Re-anchor one byte past each hit so overlapping matches are kept.
    while let Some(rel) = finder.find(&buffer[pos..]) {
        offsets.push(pos + rel);
        pos += rel + 1;
    }

    offsets
}

/// Carves candidate objects for every format in the signature table in one
/// pass over the buffer. Start offsets are not deduplicated against ranges
/// already carved for the same format; a start inside another object is
/// its own candidate.
pub fn carve(buffer: &[u8]) -> Vec<CarvedImage> {
    let mut starts: [Vec<Offset>; SIGNATURES.len()] = std::array::from_fn(|_| Vec::new());

    for mat in START_MARKERS.find_overlapping_iter(buffer) {
        starts[mat.pattern().as_usize()].push(mat.start());
    }

    let mut carved = Vec::new();

    for (spec, mut group) in SIGNATURES.iter().zip(starts) {
        group.sort_unstable();

        let finder = memmem::Finder::new(spec.end);
        let mut index = 0;

        for start in group {
            // Nearest following end marker. A start with no terminator is
            // dropped rather than carved open-ended.
            let Some(rel) = finder.find(&buffer[start..]) else {
                continue;
            };

            index += 1;
            carved.push(CarvedImage {
                format: spec.format,
                index,
                start,
                end: start + rel + spec.end.len(),
            });
        }
    }

    carved
}
