//! Bundle file serialization.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{
    Path,
    PathBuf,
};

use super::error::BundleError;
use super::registry::ConverterRegistry;
use crate::types::Locale;

/// Subdirectory under a resource root that holds generated bundles.
pub const DYNAMIC_RESOURCE_DIR: &str = "dynamic";

/// Serializes one `.properties` file per registered locale under
/// `<target_root>/dynamic/<bundle_name>/`.
///
/// The bundle directory is wiped and recreated on every call, so files from
/// earlier runs (including locales no longer registered) never survive.
/// Lines are ordered by comparing the full `key=value` line; records that
/// project to equal keys are ordered by their value suffix.
///
/// # Errors
/// - [`BundleError::NotWritable`] when the bundle directory rejects writes.
/// - [`BundleError::Io`] on wipe/create/write failures. A failure for one
///   locale aborts the remaining locales; files already written by the same
///   call stay on disk.
pub(crate) fn write_bundle<T>(
    target_root: &Path,
    bundle_name: &str,
    records: &HashSet<T>,
    registry: &ConverterRegistry<T>,
) -> Result<Vec<PathBuf>, BundleError> {
    let dir = target_root.join(DYNAMIC_RESOURCE_DIR).join(bundle_name);

    // Clears all files in the bundle directory.
    match fs::remove_dir_all(&dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(BundleError::Io(e)),
    }
    fs::create_dir_all(&dir)?;

    let mut files = Vec::with_capacity(registry.len());

    for (locale, pair) in registry.iter() {
        let mut lines: Vec<String> =
            records.iter().map(|record| pair.format_line(record)).collect();
        lines.sort_unstable();

        files.push(write_properties(&dir, bundle_name, &lines, locale)?);
    }

    if !files.is_empty() {
        tracing::info!(
            "Generated properties: {:?} to '{}'",
            file_names(&files),
            dir.display()
        );
    }

    Ok(files)
}

/// Writes one locale's sorted lines, returning the file path.
///
/// The writability probe runs immediately before every write, even though the
/// directory was just created, to surface read-only filesystems and unusual
/// permission inheritance as a named error.
fn write_properties(
    dir: &Path,
    bundle_name: &str,
    lines: &[String],
    locale: &Locale,
) -> Result<PathBuf, BundleError> {
    if fs::metadata(dir)?.permissions().readonly() {
        return Err(BundleError::NotWritable(dir.to_path_buf()));
    }

    let filename = match locale.suffix() {
        None => format!("{bundle_name}.properties"),
        Some(tag) => format!("{bundle_name}_{tag}.properties"),
    };
    let file_path = dir.join(filename);

    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(&file_path, content)?;

    Ok(file_path)
}

/// File names for the log line.
fn file_names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .filter_map(|file| file.file_name().map(|name| name.to_string_lossy().into_owned()))
        .collect()
}
