use std::path::{Path, PathBuf};

use release_svn::{SvnClient, UpdateFlag};

use crate::Result;
use crate::traits::SvnProvider;

/// Drives the `svn` command-line client.
#[derive(Debug, Clone, Default)]
pub struct SvnCliProvider {
    client: SvnClient,
}

impl SvnCliProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_client(client: SvnClient) -> Self {
        Self { client }
    }
}

impl SvnProvider for SvnCliProvider {
    fn checkout(&self, url: &str, destination: &Path) -> Result<()> {
        Ok(self.client.checkout(url, destination)?)
    }

    fn update(&self, path: &Path, flags: &[UpdateFlag]) -> Result<()> {
        Ok(self.client.update(path, flags)?)
    }

    fn missing_items(&self, path: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.client.missing_items(path)?)
    }

    fn untracked_items(&self, path: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.client.untracked_items(path)?)
    }

    fn add(&self, path: &Path) -> Result<()> {
        Ok(self.client.add(path)?)
    }

    fn delete(&self, path: &Path) -> Result<()> {
        Ok(self.client.delete(path)?)
    }

    fn commit(&self, path: &Path, username: Option<&str>, message: &str) -> Result<()> {
        Ok(self.client.commit(path, username, message)?)
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        Ok(self.client.copy(from, to)?)
    }
}
