use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalvageError {
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnreadable { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", .path.display())]
    SinkWrite { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, SalvageError>;
