use std::path::{Path, PathBuf};

use release_svn::UpdateFlag;

use crate::Result;

/// Working copy of the remote release repository.
pub trait SvnProvider: Send + Sync {
    /// Checks out `url` shallowly into `destination`.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkout fails.
    fn checkout(&self, url: &str, destination: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the update fails.
    fn update(&self, path: &Path, flags: &[UpdateFlag]) -> Result<()>;

    /// Tracked items under `path` that are gone from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the status query fails.
    fn missing_items(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Items under `path` that exist on disk but are not tracked.
    ///
    /// # Errors
    ///
    /// Returns an error if the status query fails.
    fn untracked_items(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// # Errors
    ///
    /// Returns an error if scheduling the addition fails.
    fn add(&self, path: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if scheduling the deletion fails.
    fn delete(&self, path: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the commit is rejected.
    fn commit(&self, path: &Path, username: Option<&str>, message: &str) -> Result<()>;

    /// Copies `from` to `to` within the working copy, keeping history.
    ///
    /// # Errors
    ///
    /// Returns an error if the copy fails.
    fn copy(&self, from: &Path, to: &Path) -> Result<()>;
}
