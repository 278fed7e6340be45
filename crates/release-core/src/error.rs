use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown package type '{0}' (expected 'plugin' or 'theme')")]
    UnknownPackageType(String),

    #[error("release parameter '{0}' is required")]
    MissingParameter(&'static str),

    #[error("build path '{0}' must be absolute")]
    RelativeBuildPath(String),

    #[error("no files to build")]
    NoBuildFiles,
}

pub type Result<T> = std::result::Result<T, CoreError>;
