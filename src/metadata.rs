use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::error::{Result, SalvageError};
use crate::types::FileTimestamps;

/// Filesystem pass-through: the values are whatever the platform reports,
/// with no timezone normalization beyond the local representation. No
/// retry on failure.
pub fn read_timestamps(path: &Path) -> Result<FileTimestamps> {
    let unreadable = |source| SalvageError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let meta = fs::metadata(path).map_err(unreadable)?;
    let modified = meta.modified().map_err(unreadable)?;

    Ok(FileTimestamps {
        created: meta.created().ok().map(to_local),
        modified: to_local(modified),
    })
}

fn to_local(time: SystemTime) -> DateTime<Local> {
    time.into()
}
