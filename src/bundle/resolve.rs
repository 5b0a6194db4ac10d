//! Resource-root resolution.

use std::env;
use std::path::{
    Path,
    PathBuf,
};

use super::error::BundleError;

/// Capability yielding the process's resource root.
///
/// The resource root is the directory currently serving as the running
/// program's resource lookup base. `Ok(None)` means the root does not map
/// onto a real directory on the filesystem (running from inside a sealed
/// archive), which the packaging strategies treat as "no write target here".
pub trait ResourceRootResolver {
    /// Resolves the current resource root.
    ///
    /// # Errors
    /// [`BundleError::Resolution`] on I/O failures during resolution.
    fn resource_root(&self) -> Result<Option<PathBuf>, BundleError>;
}

/// Default resolver: the directory containing the current executable.
///
/// For a cargo build this is `target/<profile>`, the build-output root the
/// packaging strategies walk up from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessResourceRoot;

impl ResourceRootResolver for ProcessResourceRoot {
    fn resource_root(&self) -> Result<Option<PathBuf>, BundleError> {
        let exe = env::current_exe().map_err(|source| BundleError::Resolution {
            path: PathBuf::from("."),
            source,
        })?;

        Ok(exe.parent().map(Path::to_path_buf))
    }
}
