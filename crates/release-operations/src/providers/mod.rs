mod git;
mod metadata;
mod svn;

pub use git::Git2Provider;
pub use metadata::{FileSystemHeaderReader, FileSystemReadmeChecker};
pub use svn::SvnCliProvider;
