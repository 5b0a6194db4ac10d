//! Bundle generation orchestrator.

use std::collections::HashSet;
use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use super::Bundle;
use super::error::BundleError;
use super::packaging::Packaging;
use super::registry::{
    ConverterRegistry,
    ConverterRegistryBuilder,
};
use super::resolve::{
    ProcessResourceRoot,
    ResourceRootResolver,
};
use super::writer;
use crate::types::Locale;

/// Generates the on-disk resource bundle for one named bundle.
///
/// Owns the record set, the bundle name, and the converter registry. Each
/// [`make`](Self::make) call picks the first deployment layout matching the
/// current environment and delegates serialization to the writer.
///
/// Runs synchronously to completion; concurrent calls targeting the same
/// bundle name are not guarded against each other.
pub struct BundleGenerator<T> {
    /// Output subdirectory and filename stem.
    bundle_name: String,
    /// Input records; uniqueness and iteration order are the caller's concern.
    records: HashSet<T>,
    /// Locale projector registry; read-only.
    registry: ConverterRegistry<T>,
    /// Injected resource-root capability.
    resolver: Box<dyn ResourceRootResolver>,
}

impl<T> BundleGenerator<T> {
    /// Creates a builder for the given bundle tag and record set.
    #[must_use]
    pub fn builder(bundle: Bundle, records: HashSet<T>) -> BundleGeneratorBuilder<T> {
        BundleGeneratorBuilder {
            bundle_name: bundle.name().to_string(),
            records,
            registry: ConverterRegistry::builder(),
            resolver: Box::new(ProcessResourceRoot),
        }
    }

    /// Generates the bundle files for the current environment.
    ///
    /// Returns the produced paths. An empty registry produces nothing and
    /// touches nothing — the environment is not even consulted. An
    /// environment with no applicable layout (running from a sealed archive)
    /// also yields an empty list without an error.
    ///
    /// # Errors
    /// Any [`BundleError`] aborts the call; files already written by the same
    /// call stay on disk.
    pub fn make(&self) -> Result<Vec<PathBuf>, BundleError> {
        if self.registry.is_empty() {
            return Ok(Vec::new());
        }

        for packaging in Packaging::PRIORITY {
            if packaging.is_supported(self.resolver.as_ref())? {
                tracing::debug!(?packaging, bundle = %self.bundle_name, "Packaging layout selected");
                return packaging.create_properties(self, self.resolver.as_ref());
            }
        }

        Ok(Vec::new())
    }

    /// Serializes all registered locales under `target_root`.
    pub(crate) fn write_to(&self, target_root: &Path) -> Result<Vec<PathBuf>, BundleError> {
        writer::write_bundle(target_root, &self.bundle_name, &self.records, &self.registry)
    }
}

impl<T> fmt::Debug for BundleGenerator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BundleGenerator")
            .field("bundle_name", &self.bundle_name)
            .field("records", &self.records.len())
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Assembles a [`BundleGenerator`].
pub struct BundleGeneratorBuilder<T> {
    /// Output subdirectory and filename stem.
    bundle_name: String,
    /// Input records.
    records: HashSet<T>,
    /// Registry under construction.
    registry: ConverterRegistryBuilder<T>,
    /// Resource-root capability; defaults to [`ProcessResourceRoot`].
    resolver: Box<dyn ResourceRootResolver>,
}

impl<T> BundleGeneratorBuilder<T> {
    /// Registers the projector pair for a locale; re-registration overwrites.
    #[must_use]
    pub fn add_locale(
        mut self,
        locale: Locale,
        key_fn: impl Fn(&T) -> String + 'static,
        val_fn: impl Fn(&T) -> String + 'static,
    ) -> Self {
        self.registry = self.registry.add_locale(locale, key_fn, val_fn);
        self
    }

    /// Registers the pair for the default (root) locale.
    #[must_use]
    pub fn add_default(
        self,
        key_fn: impl Fn(&T) -> String + 'static,
        val_fn: impl Fn(&T) -> String + 'static,
    ) -> Self {
        self.add_locale(Locale::Root, key_fn, val_fn)
    }

    /// Overrides the resource-root capability (tests inject fakes here).
    #[must_use]
    pub fn resolver(mut self, resolver: impl ResourceRootResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Finalizes the generator.
    #[must_use]
    pub fn build(self) -> BundleGenerator<T> {
        BundleGenerator {
            bundle_name: self.bundle_name,
            records: self.records,
            registry: self.registry.build(),
            resolver: self.resolver,
        }
    }
}

impl<T> fmt::Debug for BundleGeneratorBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BundleGeneratorBuilder")
            .field("bundle_name", &self.bundle_name)
            .field("records", &self.records.len())
            .finish_non_exhaustive()
    }
}
