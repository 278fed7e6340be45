use std::path::Path;

use crate::Result;

/// Local repository the release is cut from.
pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or HEAD is detached.
    fn current_branch(&self, project_root: &Path) -> Result<String>;

    /// Switches the working tree to `branch`, tracking `origin/<branch>` when
    /// no local branch exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch cannot be found or the checkout would
    /// overwrite local changes.
    fn checkout_branch(&self, project_root: &Path, branch: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or status check fails.
    fn is_working_tree_clean(&self, project_root: &Path) -> Result<bool>;
}
