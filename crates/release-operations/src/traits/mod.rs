mod git_provider;
mod metadata;
mod svn_provider;

pub use git_provider::GitProvider;
pub use metadata::{HeaderReader, ReadmeChecker};
pub use svn_provider::SvnProvider;
