use std::fmt;

use chrono::{DateTime, Local};

pub type Offset = usize;

pub const CHUNK_SIZE: usize = 100;
pub const HEX_PREVIEW_BYTES: usize = 1000;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Jpeg => write!(f, "jpeg"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// A contiguous byte range of the source buffer delimited by a start and
/// end signature of the same format. `end` includes the end marker bytes,
/// so `bytes()` is a complete candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarvedImage {
    pub format: ImageFormat,
    /// 1-based position within this format group, in discovery order.
    pub index: usize,
    pub start: Offset,
    pub end: Offset,
}

impl CarvedImage {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn bytes<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.start..self.end]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    /// 1-based over retained segments, not over raw windows.
    pub index: usize,
    pub text: String,
}

/// Filesystem-reported times, last observed at the moment of the call.
/// `created` is absent where the platform or filesystem has no birth time;
/// it is reported as unavailable rather than substituted.
#[derive(Debug, Clone, Copy)]
pub struct FileTimestamps {
    pub created: Option<DateTime<Local>>,
    pub modified: DateTime<Local>,
}

impl FileTimestamps {
    pub fn created_display(&self) -> String {
        match self.created {
            Some(t) => t.format(TIMESTAMP_FORMAT).to_string(),
            None => "unavailable on this filesystem".to_string(),
        }
    }

    pub fn modified_display(&self) -> String {
        self.modified.format(TIMESTAMP_FORMAT).to_string()
    }
}
