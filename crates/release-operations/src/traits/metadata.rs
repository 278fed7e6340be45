use std::path::Path;

use release_core::PackageType;
use release_metadata::FileHeader;

use crate::Result;

pub trait HeaderReader: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the main file cannot be read.
    fn read_header(&self, path: &Path, package_type: PackageType) -> Result<FileHeader>;
}

/// Confirms the release notes agree with the version being released.
pub trait ReadmeChecker: Send + Sync {
    /// # Errors
    ///
    /// Returns [`crate::PreflightError::VersionMismatch`] when the readme is
    /// missing or declares another version.
    fn check_version(&self, project_root: &Path, version: &str) -> Result<()>;
}
