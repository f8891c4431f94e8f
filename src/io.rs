use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SalvageError};

/// Reads the whole source file into memory. Target documents are small, so
/// one read per invocation replaces any streaming machinery.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    let buffer = fs::read(path).map_err(|source| SalvageError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(bytes = buffer.len(), path = %path.display(), "source loaded");
    Ok(buffer)
}
