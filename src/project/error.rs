//! Errors raised while loading script files from disk.

use std::path::PathBuf;

use thiserror::Error;

/// A failure to find, read or accept a script file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no file extension: {}", .0.display())]
    NoExtension(PathBuf),

    #[error("unsupported file extension '{extension}': {}", path.display())]
    UnsupportedExtension { path: PathBuf, extension: String },

    #[error("failed to load {} file(s)", .0.len())]
    Multiple(Vec<LoadError>),
}

impl LoadError {
    /// The individual failures, flattening [`LoadError::Multiple`].
    pub fn failures(&self) -> Vec<&LoadError> {
        match self {
            LoadError::Multiple(errors) => errors.iter().flat_map(|e| e.failures()).collect(),
            other => vec![other],
        }
    }
}
