use git2::BranchType;
use git2::build::CheckoutBuilder;

use crate::{GitError, Result};

use super::Repository;

const DEFAULT_REMOTE: &str = "origin";

impl Repository {
    /// Switches the working tree to `branch`.
    ///
    /// A branch that only exists on `origin` gets a local tracking branch,
    /// the way `git checkout <branch>` behaves. The checkout is safe: it
    /// refuses to overwrite local modifications.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::BranchNotFound`] if neither a local nor a remote
    /// branch of that name exists, or a git error if the checkout conflicts.
    pub fn checkout_branch(&self, branch: &str) -> Result<()> {
        let local = match self.inner.find_branch(branch, BranchType::Local) {
            Ok(local) => local,
            Err(_) => self.track_remote_branch(branch)?,
        };

        let reference = local.into_reference();
        let refname = reference
            .name()
            .ok_or_else(|| GitError::BranchNotFound {
                branch: branch.to_string(),
            })?
            .to_string();
        let target = reference.peel(git2::ObjectType::Commit)?;

        self.inner
            .checkout_tree(&target, Some(CheckoutBuilder::new().safe()))?;
        self.inner.set_head(&refname)?;

        Ok(())
    }

    fn track_remote_branch(&self, branch: &str) -> Result<git2::Branch<'_>> {
        let remote_name = format!("{DEFAULT_REMOTE}/{branch}");
        let remote = self
            .inner
            .find_branch(&remote_name, BranchType::Remote)
            .map_err(|_| GitError::BranchNotFound {
                branch: branch.to_string(),
            })?;

        let commit = remote.get().peel_to_commit()?;
        let mut local = self.inner.branch(branch, &commit, false)?;
        local.set_upstream(Some(&remote_name))?;
        Ok(local)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{commit_file, setup_test_repo};
    use crate::GitError;

    #[test]
    fn checkout_existing_branch() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let head = repo.inner.head()?.peel_to_commit()?;
        repo.inner.branch("release", &head, false)?;

        repo.checkout_branch("release")?;

        assert_eq!(repo.current_branch()?, "release");
        Ok(())
    }

    #[test]
    fn checkout_updates_working_tree() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        let original = repo.current_branch()?;
        let head = repo.inner.head()?.peel_to_commit()?;
        repo.inner.branch("feature", &head, false)?;

        repo.checkout_branch("feature")?;
        commit_file(&repo, "feature.php", "<?php\n")?;
        assert!(dir.path().join("feature.php").exists());

        repo.checkout_branch(&original)?;

        assert!(!dir.path().join("feature.php").exists());
        assert_eq!(repo.current_branch()?, original);
        Ok(())
    }

    #[test]
    fn checkout_missing_branch_fails() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        let result = repo.checkout_branch("does-not-exist");

        assert!(matches!(
            result,
            Err(GitError::BranchNotFound { ref branch }) if branch == "does-not-exist"
        ));
        Ok(())
    }
}
