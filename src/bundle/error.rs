//! Bundle generation error definitions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Defines errors that may occur while generating resource bundles.
///
/// Generation is not transactional: a failure aborts the call, and files
/// already written by the same call stay on disk.
#[derive(Error, Debug)]
pub enum BundleError {
    /// Error while resolving the resource root or the source-tree location
    #[error("Failed to resolve resource root at '{}': {source}", .path.display())]
    Resolution {
        /// Path being resolved when the failure occurred
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// Error when a target directory exists but rejects writes
    #[error("Path is not writable: {}", .0.display())]
    NotWritable(PathBuf),
    /// Generic I/O error while wiping directories or writing bundle files
    #[error("Failed to write bundle: {0}")]
    Io(#[from] io::Error),
}
