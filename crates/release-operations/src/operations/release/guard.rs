use std::path::Path;

use tracing::{debug, warn};

use crate::traits::GitProvider;

/// Checks out the original branch when dropped, however the release ended.
///
/// Restoration failures are logged and swallowed so they never replace the
/// error that ended the release.
pub struct BranchRestoreGuard<'a, G: GitProvider> {
    git_provider: &'a G,
    project_root: &'a Path,
    branch: &'a str,
}

impl<'a, G: GitProvider> BranchRestoreGuard<'a, G> {
    pub fn new(git_provider: &'a G, project_root: &'a Path, branch: &'a str) -> Self {
        Self {
            git_provider,
            project_root,
            branch,
        }
    }
}

impl<G: GitProvider> Drop for BranchRestoreGuard<'_, G> {
    fn drop(&mut self) {
        match self
            .git_provider
            .checkout_branch(self.project_root, self.branch)
        {
            Ok(()) => debug!(branch = self.branch, "restored original branch"),
            Err(e) => warn!(branch = self.branch, error = %e, "failed to restore original branch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockGitProvider;

    #[test]
    fn restores_branch_on_drop() {
        let git = MockGitProvider::new().on_branch("release");

        {
            let _guard = BranchRestoreGuard::new(&git, Path::new("/project"), "feature");
        }

        assert_eq!(git.checkouts(), vec!["feature".to_string()]);
        assert_eq!(git.branch(), "feature");
    }

    #[test]
    fn restore_failure_does_not_panic() {
        let git = MockGitProvider::new().without_branch("gone");

        {
            let _guard = BranchRestoreGuard::new(&git, Path::new("/project"), "gone");
        }

        assert_eq!(git.checkouts(), vec!["gone".to_string()]);
    }
}
