use std::path::Path;

use release_core::PackageType;
use release_metadata::FileHeader;
use tracing::debug;

use crate::Result;
use crate::error::{PreflightError, ValidationError};
use crate::traits::{HeaderReader, ReadmeChecker};

pub struct FileSystemHeaderReader;

impl FileSystemHeaderReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemHeaderReader {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderReader for FileSystemHeaderReader {
    fn read_header(&self, path: &Path, package_type: PackageType) -> Result<FileHeader> {
        release_metadata::read_header(path, package_type).map_err(|source| {
            ValidationError::Metadata {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }
}

pub struct FileSystemReadmeChecker;

impl FileSystemReadmeChecker {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReadmeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadmeChecker for FileSystemReadmeChecker {
    fn check_version(&self, project_root: &Path, version: &str) -> Result<()> {
        let readme = release_metadata::check_version(project_root, version).map_err(|source| {
            PreflightError::VersionMismatch {
                version: version.to_string(),
                source,
            }
        })?;
        debug!(
            stable_tag = ?readme.stable_tag,
            latest_changelog = ?readme.latest_changelog,
            "release notes match version"
        );
        Ok(())
    }
}
