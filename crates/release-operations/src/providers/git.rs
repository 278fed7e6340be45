use std::path::Path;

use release_git::Repository;

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn current_branch(&self, project_root: &Path) -> Result<String> {
        let repo = Repository::open(project_root)?;
        Ok(repo.current_branch()?)
    }

    fn checkout_branch(&self, project_root: &Path, branch: &str) -> Result<()> {
        let repo = Repository::open(project_root)?;
        Ok(repo.checkout_branch(branch)?)
    }

    fn is_working_tree_clean(&self, project_root: &Path) -> Result<bool> {
        let repo = Repository::open(project_root)?;
        Ok(repo.is_working_tree_clean()?)
    }
}
