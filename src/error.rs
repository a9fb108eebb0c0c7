//! Error types for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure is terminal for the run: the first one unwinds the whole traversal.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("cannot read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid {flag} pattern '{pattern}': {source}")]
    InvalidPattern {
        flag: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("cannot create output file '{path}': {source}")]
    OutputCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
}

impl TreeError {
    /// True when a directory read failed because the path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::DirectoryRead { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// True when a directory read failed for lack of permission.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, TreeError::DirectoryRead { source, .. } if source.kind() == io::ErrorKind::PermissionDenied)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;
