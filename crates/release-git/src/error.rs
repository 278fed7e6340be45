use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("branch '{branch}' does not exist")]
    BranchNotFound { branch: String },

    #[error("HEAD is detached, not on a branch")]
    DetachedHead,
}
