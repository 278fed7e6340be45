use crate::traits::{GitProvider, ReadmeChecker, SvnProvider};

/// Providers shared by every release stage.
pub struct ReleaseContext<G, S, R> {
    git_provider: G,
    svn_provider: S,
    readme_checker: R,
}

impl<G, S, R> ReleaseContext<G, S, R>
where
    G: GitProvider,
    S: SvnProvider,
    R: ReadmeChecker,
{
    pub fn new(git_provider: G, svn_provider: S, readme_checker: R) -> Self {
        Self {
            git_provider,
            svn_provider,
            readme_checker,
        }
    }

    #[must_use]
    pub fn git_provider(&self) -> &G {
        &self.git_provider
    }

    #[must_use]
    pub fn svn_provider(&self) -> &S {
        &self.svn_provider
    }

    #[must_use]
    pub fn readme_checker(&self) -> &R {
        &self.readme_checker
    }
}
