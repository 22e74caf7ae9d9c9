//! Store errors.

use std::path::PathBuf;

/// Error returned when a file-backed store cannot be loaded or saved.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The backing file is not a JSON object of strings
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "cannot access store '{}': {}", path.display(), source)
            }
            StoreError::Malformed { path, source } => {
                write!(f, "store '{}' is malformed: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Malformed { source, .. } => Some(source),
        }
    }
}
