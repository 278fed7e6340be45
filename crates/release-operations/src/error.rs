use std::path::PathBuf;

use release_metadata::{MetadataError, ReadmeError};
use thiserror::Error;

use crate::operations::ReleaseStage;

/// Problems with the resolved release parameters, reported before any stage runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "missing release repository slug; specify it via --slug or define `releaseRepo.slug` in the configuration"
    )]
    MissingSlug,

    #[error(
        "missing build path; specify it via --build-path or define `releaseRepo.buildPath` in the configuration"
    )]
    MissingBuildPath,

    #[error("missing files to build; define `files.src` in the configuration")]
    NoFilesToBuild,

    #[error("missing main file; specify it via --file or define `files.main` in the configuration")]
    MissingMainFile,

    #[error("no version header found in '{path}'")]
    MissingVersion { path: PathBuf },

    #[error("failed to read the version from '{path}'")]
    Metadata {
        path: PathBuf,
        #[source]
        source: MetadataError,
    },

    #[error("unknown package type '{value}'; expected `plugin` or `theme`")]
    InvalidPackageType { value: String },

    #[error("invalid `{setting}` patterns")]
    InvalidGlob {
        setting: &'static str,
        #[source]
        source: release_config::ConfigError,
    },

    #[error(transparent)]
    Parameters(#[from] release_core::CoreError),
}

/// Local state that blocks a release before anything remote is touched.
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("working tree has uncommitted changes; commit or stash them before releasing")]
    DirtyWorkingTree,

    #[error("release notes do not match version '{version}'")]
    VersionMismatch {
        version: String,
        #[source]
        source: ReadmeError,
    },
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Preflight(#[from] PreflightError),

    #[error(transparent)]
    Git(#[from] release_git::GitError),

    #[error(transparent)]
    Svn(#[from] release_svn::SvnError),

    #[error("filesystem operation failed on '{path}'")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("release stage '{stage}' failed")]
    StageFailed {
        stage: ReleaseStage,
        #[source]
        source: Box<OperationError>,
    },
}

impl OperationError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// The stage that failed, if the error came out of the pipeline.
    #[must_use]
    pub fn failed_stage(&self) -> Option<ReleaseStage> {
        match self {
            Self::StageFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Innermost error, skipping stage wrappers.
    #[must_use]
    pub fn root(&self) -> &OperationError {
        match self {
            Self::StageFailed { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;
