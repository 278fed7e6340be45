//! Makes a destination directory mirror an indexed list of source files.
//!
//! Syncing happens in two passes. [`reconcile`] deletes destination entries
//! that are no longer wanted, then [`populate`] copies every source in. Files
//! that stay wanted are overwritten in place, never deleted and recreated.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use release_core::path::{base_name, relative_string, relativize};
use release_core::{DiffEntry, diff, removed_values};
use tracing::{debug, warn};

use crate::OperationError;
use crate::Result;

/// How [`populate`] lays sources out under the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulateOptions {
    preserve_structure: bool,
    source_root: PathBuf,
}

impl PopulateOptions {
    /// Keep each source's path relative to `source_root`.
    #[must_use]
    pub fn preserve(source_root: impl Into<PathBuf>) -> Self {
        Self {
            preserve_structure: true,
            source_root: source_root.into(),
        }
    }

    /// Place every source directly under the destination by base name.
    #[must_use]
    pub fn flatten() -> Self {
        Self {
            preserve_structure: false,
            source_root: PathBuf::new(),
        }
    }

    /// Destination-relative path for `source`, `/`-separated.
    ///
    /// Sources outside the source root fall back to their base name. The
    /// source root itself has no target.
    #[must_use]
    pub fn relative_target(&self, source: &Path) -> Option<String> {
        if !self.preserve_structure {
            return base_name(source);
        }
        if relativize(source, &self.source_root).is_none() {
            return base_name(source);
        }
        relative_string(source, &self.source_root)
    }

    /// Targets of all `sources`, in order.
    #[must_use]
    pub fn relative_targets(&self, sources: &[PathBuf]) -> Vec<String> {
        sources
            .iter()
            .filter_map(|source| self.relative_target(source))
            .collect()
    }
}

/// Lists everything under `root` as `/`-separated relative paths.
///
/// Hidden entries are skipped together with their contents, so working copy
/// metadata never shows up. Directories precede their children and siblings
/// are sorted by name. A missing `root` lists as empty.
///
/// # Errors
///
/// Returns [`OperationError::Filesystem`] if a directory cannot be read.
pub fn list_relative(root: &Path) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    if root.is_dir() {
        collect_relative(root, "", &mut entries)?;
    }
    Ok(entries)
}

fn collect_relative(dir: &Path, prefix: &str, entries: &mut Vec<String>) -> Result<()> {
    let read_dir = fs::read_dir(dir).map_err(|e| OperationError::filesystem(dir, e))?;

    let mut children = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| OperationError::filesystem(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let file_type = entry
            .file_type()
            .map_err(|e| OperationError::filesystem(entry.path(), e))?;
        children.push((name, entry.path(), file_type.is_dir()));
    }
    children.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, path, is_dir) in children {
        let relative = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };
        entries.push(relative.clone());
        if is_dir {
            collect_relative(&path, &relative, entries)?;
        }
    }
    Ok(())
}

/// Deletes every entry of `current` that the sequence diff against
/// `desired` reports as removed, resolved under `destination`.
///
/// A removed directory that still holds a desired entry is kept; its stale
/// children are removed individually. Deletion is best effort: an entry that
/// is already gone (for example because its parent directory went first) is
/// skipped. Returns the entries that were actually deleted.
#[must_use]
pub fn reconcile(destination: &Path, current: &[String], desired: &[String]) -> Vec<String> {
    let entries: Vec<DiffEntry> = diff(current, desired);
    let desired_parents = ancestors(desired);
    let mut deleted = Vec::new();

    for value in removed_values(&entries) {
        let path = destination.join(value);
        let outcome = match fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_dir() && desired_parents.contains(value) => continue,
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&path),
            Ok(_) => fs::remove_file(&path),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(()) => {
                debug!(path = %path.display(), "removed stale entry");
                deleted.push(value.to_string());
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "failed to remove stale entry"),
        }
    }

    deleted
}

/// Every proper ancestor directory of the given relative entries.
fn ancestors(entries: &[String]) -> HashSet<&str> {
    entries
        .iter()
        .flat_map(|entry| {
            entry
                .match_indices('/')
                .map(move |(index, _)| &entry[..index])
        })
        .collect()
}

/// Copies each source into `destination`, creating directories as needed
/// and overwriting existing files. Symlinks and other special files are
/// skipped. Returns the destination paths of the copied files.
///
/// # Errors
///
/// Returns [`OperationError::Filesystem`] if a source cannot be inspected or
/// a copy fails.
pub fn populate(
    sources: &[PathBuf],
    destination: &Path,
    options: &PopulateOptions,
) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::new();

    for source in sources {
        let meta =
            fs::symlink_metadata(source).map_err(|e| OperationError::filesystem(source, e))?;
        let Some(relative) = options.relative_target(source) else {
            continue;
        };
        let target = destination.join(&relative);

        if meta.is_dir() {
            if options.preserve_structure {
                create_dir(&target)?;
            }
        } else if meta.is_file() {
            if let Some(parent) = target.parent() {
                create_dir(parent)?;
            }
            fs::copy(source, &target).map_err(|e| OperationError::filesystem(&target, e))?;
            copied.push(target);
        } else {
            debug!(path = %source.display(), "skipping special file");
        }
    }

    Ok(copied)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| OperationError::filesystem(path, e))
}
