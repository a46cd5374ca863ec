use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a comparison before a verdict can be reached.
///
/// Read errors after both files are open are not represented here; the
/// comparator logs them and reports the pair as not identical.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("chunk size must be at least 1 byte")]
    InvalidChunkSize,
}

impl CompareError {
    pub(crate) fn unreadable(path: &std::path::Path, source: io::Error) -> Self {
        CompareError::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}
