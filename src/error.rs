//! Error types for the frontstrip library
//!
//! Only reading the post can fail. A document without front matter or without
//! image references is valid input and never produces an error.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum FrontStripError {
    /// The post file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The post file is not valid UTF-8
    #[error("Invalid encoding in {path} (expected UTF-8)")]
    InvalidEncoding { path: PathBuf },

    /// Any other failure while reading the post file
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FrontStripError>;

impl FrontStripError {
    /// Classify an I/O error raised while reading `path`
    pub fn from_read(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            io::ErrorKind::InvalidData => Self::InvalidEncoding { path },
            _ => Self::Read { path, source },
        }
    }
}
