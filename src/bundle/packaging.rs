//! Deployment layout strategies.
//!
//! Where generated bundles can land depends on how the running program is
//! deployed. Each layout knows how to detect itself and where to write; the
//! layouts are evaluated in a fixed priority order and the first applicable
//! one wins.

use std::path::{
    Path,
    PathBuf,
};

use super::error::BundleError;
use super::generator::BundleGenerator;
use super::resolve::ResourceRootResolver;

/// Conventional source-tree location for hand-authored resources, relative
/// to the project root.
const SOURCE_RESOURCE_SEGMENTS: [&str; 3] = ["src", "main", "resources"];

/// Deployment layouts the generator can run under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packaging {
    /// Development tree. Dual-writes: the build-output root (so an already
    /// running artifact sees fresh files) and the source tree (so the IDE
    /// picks them up without a rebuild).
    LocalTree,
    /// Sealed, immutable archive. The archive cannot be written at run time,
    /// so no write target exists.
    SealedArchive,
    /// Flat, file-backed resource root that is not a recognized development
    /// tree. Writes once, directly into that root.
    UnpackedArchive,
}

impl Packaging {
    /// Evaluation order. The first supported layout wins.
    pub const PRIORITY: [Self; 3] = [Self::LocalTree, Self::SealedArchive, Self::UnpackedArchive];

    /// Checks whether this layout matches the current environment.
    ///
    /// # Errors
    /// Propagates resolution failures; they abort the whole generation call.
    pub(crate) fn is_supported(
        self,
        resolver: &dyn ResourceRootResolver,
    ) -> Result<bool, BundleError> {
        match self {
            Self::LocalTree => {
                let Some(resources_dir) = source_resources_dir(resolver)? else {
                    return Ok(false);
                };

                Ok(resources_dir.exists())
            }
            Self::SealedArchive => Ok(false), // Not supported.
            Self::UnpackedArchive => Ok(resolver.resource_root()?.is_some()
                && !Self::LocalTree.is_supported(resolver)?),
        }
    }

    /// Writes the bundle for this layout, returning the produced files.
    pub(crate) fn create_properties<T>(
        self,
        generator: &BundleGenerator<T>,
        resolver: &dyn ResourceRootResolver,
    ) -> Result<Vec<PathBuf>, BundleError> {
        match self {
            Self::LocalTree => {
                let Some(resources_dir) = source_resources_dir(resolver)? else {
                    return Ok(Vec::new());
                };

                let mut files = Self::UnpackedArchive.create_properties(generator, resolver)?;
                files.extend(generator.write_to(&resources_dir)?);

                Ok(files)
            }
            Self::SealedArchive => Ok(Vec::new()),
            Self::UnpackedArchive => {
                let Some(root) = resolver.resource_root()? else {
                    return Ok(Vec::new());
                };

                generator.write_to(&root)
            }
        }
    }
}

/// Walks up from the resource root to the conventional source-tree resources
/// directory, or `None` when the root does not support the walk.
///
/// The project root is canonicalized before the probe so symlinked build
/// directories do not fool the layout check. Called again at write time; the
/// result is not cached between the applicability check and the write, so the
/// two resolutions may disagree if the environment changes in between.
fn source_resources_dir(
    resolver: &dyn ResourceRootResolver,
) -> Result<Option<PathBuf>, BundleError> {
    let Some(root) = resolver.resource_root()? else {
        return Ok(None);
    };

    // Build output sits two levels below the project root, e.g. `target/debug`.
    let Some(project_root) = root.parent().and_then(Path::parent) else {
        return Ok(None);
    };
    if !project_root.exists() {
        return Ok(None);
    }

    let project_root =
        project_root.canonicalize().map_err(|source| BundleError::Resolution {
            path: project_root.to_path_buf(),
            source,
        })?;

    Ok(Some(SOURCE_RESOURCE_SEGMENTS.iter().fold(project_root, |dir, segment| dir.join(segment))))
}
