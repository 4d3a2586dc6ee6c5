use std::{io, path};

/// Causes behind a failed store operation.
///
/// These never cross the public `save`/`read`/`remove` surface; they are
/// logged and collapsed there. Directory helpers that can fail before any
/// record is touched return them directly.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid record id {id:?}: {message}")]
    InvalidId { id: String, message: String },

    #[error("An I/O error occurred at {path}: {error}")]
    Io { path: path::PathBuf, error: io::Error },

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No user data directory is available on this platform")]
    NoUserDataDirectory,
}

impl Error {
    pub(crate) fn io(path: &path::Path, error: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            error,
        }
    }
}
