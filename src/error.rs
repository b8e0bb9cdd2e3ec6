//! Global error handling for skukozh
//!
//! Only root-access failures abort a discovery run; everything else the
//! traversal encounters degrades into "this path was excluded".

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for skukozh operations
#[derive(Error, Debug)]
pub enum SkukozhError {
    /// The walk root cannot be reached
    #[error("cannot access directory {path}: {source}")]
    RootAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The walk root exists but is not a directory
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    /// The file-list artifact is missing or unreadable
    #[error("cannot read file list {path}: {source}")]
    FileListRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The result artifact is missing or unreadable
    #[error("cannot read result file {path}: {source}")]
    ResultRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unexpected error with caller-supplied context
    #[error("{0}")]
    Unexpected(String),
}

/// Specialized Result type for skukozh operations
pub type Result<T> = std::result::Result<T, SkukozhError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            SkukozhError::Unexpected(format!("{}: {}", context, e))
        })
    }
}
