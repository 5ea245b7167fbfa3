/// Writing command output to disk.
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Errors from [`write_file`].
#[derive(Debug, Error)]
pub enum WriteError {
    /// A missing parent directory could not be created.
    #[error("Cannot create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The destination could not be opened or written.
    #[error("Cannot write file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write `content` to `destination`, creating missing parent directories.
///
/// An existing file is truncated and overwritten.
///
/// # Errors
///
/// Returns `WriteError` if a parent directory cannot be created or the file
/// cannot be written (permission denied, destination is a directory, ...).
pub fn write_file(content: &str, destination: &Path) -> Result<(), WriteError> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(destination, content).map_err(|source| WriteError::Write {
        path: destination.to_path_buf(),
        source,
    })?;

    info!(
        "Wrote {} bytes to {}",
        content.len(),
        destination.display()
    );
    Ok(())
}
