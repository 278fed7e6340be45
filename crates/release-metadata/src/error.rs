use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read file header from '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("no readme found in '{dir}'")]
    NotFound { dir: PathBuf },

    #[error("failed to read readme at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("readme stable tag '{stable_tag}' does not match version '{version}'")]
    StableTagMismatch { stable_tag: String, version: String },

    #[error("latest changelog entry '{latest}' does not match version '{version}'")]
    ChangelogMismatch { latest: String, version: String },
}
