/// Errors from the directory walker.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a directory tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The source path does not exist.
    #[error("Path '{}' does not exist", path.display())]
    PathNotFound {
        /// The path that was scanned.
        path: PathBuf,
    },

    /// The source path exists but is not a directory.
    #[error("Path '{}' is not a directory", path.display())]
    NotADirectory {
        /// The path that was scanned.
        path: PathBuf,
    },

    /// Reading the metadata of the source path failed for another reason.
    #[error("Cannot access '{}': {source}", path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Listing a directory (or one of its entries) failed, e.g. permission denied.
    #[error("Cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
