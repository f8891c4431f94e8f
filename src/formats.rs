use crate::types::ImageFormat;

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
pub const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

pub const PNG_HEADER: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];
/// Zero-length IEND chunk plus its fixed CRC, the last 12 bytes of any
/// well-formed PNG stream.
pub const PNG_IEND: [u8; 12] = [
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Start/end marker pair for one carvable format. Signatures are format
/// constants, never derived from input.
pub struct Signature {
    pub format: ImageFormat,
    pub start: &'static [u8],
    pub end: &'static [u8],
}

/// Declaration order is output order: jpeg objects are reported before png.
/// Adding a format here is all the carver needs.
pub const SIGNATURES: [Signature; 2] = [
    Signature {
        format: ImageFormat::Jpeg,
        start: &JPEG_SOI,
        end: &JPEG_EOI,
    },
    Signature {
        format: ImageFormat::Png,
        start: &PNG_HEADER,
        end: &PNG_IEND,
    },
];
