use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use release_core::{ASSETS_DIR, PackageType, TAGS_DIR, TRUNK_DIR};
use release_metadata::{FileHeader, ReadmeError};
use release_svn::{SvnError, UpdateFlag};

use crate::Result;
use crate::error::{OperationError, PreflightError};
use crate::traits::{GitProvider, HeaderReader, ReadmeChecker, SvnProvider};

fn svn_failure(command: &str) -> OperationError {
    SvnError::CommandFailed {
        command: command.to_string(),
        status: Some(1),
        stderr: "svn: E170013: Unable to connect to a repository".to_string(),
    }
    .into()
}

pub struct MockGitProvider {
    branch: Mutex<String>,
    clean: bool,
    missing_branches: Vec<String>,
    checkouts: Mutex<Vec<String>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            branch: Mutex::new("feature".to_string()),
            clean: true,
            missing_branches: Vec::new(),
            checkouts: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn on_branch(self, branch: &str) -> Self {
        *self.branch.lock().expect("lock poisoned") = branch.to_string();
        self
    }

    #[must_use]
    pub fn dirty(mut self) -> Self {
        self.clean = false;
        self
    }

    #[must_use]
    pub fn without_branch(mut self, branch: &str) -> Self {
        self.missing_branches.push(branch.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn checkouts(&self) -> Vec<String> {
        self.checkouts.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn branch(&self) -> String {
        self.branch.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn current_branch(&self, _project_root: &Path) -> Result<String> {
        Ok(self.branch())
    }

    fn checkout_branch(&self, _project_root: &Path, branch: &str) -> Result<()> {
        self.checkouts
            .lock()
            .expect("lock poisoned")
            .push(branch.to_string());
        if self.missing_branches.iter().any(|b| b == branch) {
            return Err(release_git::GitError::BranchNotFound {
                branch: branch.to_string(),
            }
            .into());
        }
        *self.branch.lock().expect("lock poisoned") = branch.to_string();
        Ok(())
    }

    fn is_working_tree_clean(&self, _project_root: &Path) -> Result<bool> {
        Ok(self.clean)
    }
}

/// One recorded call against [`MockSvnProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvnCall {
    Checkout { url: String, destination: PathBuf },
    Update { path: PathBuf, flags: Vec<UpdateFlag> },
    Add(PathBuf),
    Delete(PathBuf),
    Commit { path: PathBuf, username: Option<String>, message: String },
    Copy { from: PathBuf, to: PathBuf },
}

/// Simulates a working copy on the local filesystem.
///
/// `checkout` lays out `trunk`, `assets` and `tags` plus any seeded remote
/// files; `copy` and `delete` act on disk the way svn would. Status queries
/// return the configured lists filtered to the queried subtree.
pub struct MockSvnProvider {
    remote_files: Vec<(String, String)>,
    missing: Vec<PathBuf>,
    untracked: Vec<PathBuf>,
    fail_on: Option<&'static str>,
    calls: Mutex<Vec<SvnCall>>,
}

impl MockSvnProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            remote_files: Vec::new(),
            missing: Vec::new(),
            untracked: Vec::new(),
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Seeds a file that already exists in the release repository,
    /// relative to the repository root (for example `trunk/old.php`).
    #[must_use]
    pub fn with_remote_file(mut self, relative: &str, content: &str) -> Self {
        self.remote_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    #[must_use]
    pub fn with_missing(mut self, path: PathBuf) -> Self {
        self.missing.push(path);
        self
    }

    #[must_use]
    pub fn with_untracked(mut self, path: PathBuf) -> Self {
        self.untracked.push(path);
        self
    }

    /// Makes every call of the named command fail (`"checkout"`, `"commit"`, ...).
    #[must_use]
    pub fn failing_on(mut self, command: &'static str) -> Self {
        self.fail_on = Some(command);
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<SvnCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    #[must_use]
    pub fn commit_messages(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SvnCall::Commit { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, command: &str, call: SvnCall) -> Result<()> {
        self.calls.lock().expect("lock poisoned").push(call);
        if self.fail_on == Some(command) {
            return Err(svn_failure(command));
        }
        Ok(())
    }

    fn under(items: &[PathBuf], path: &Path) -> Vec<PathBuf> {
        items
            .iter()
            .filter(|item| item.starts_with(path))
            .cloned()
            .collect()
    }
}

impl Default for MockSvnProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_tree(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

impl SvnProvider for MockSvnProvider {
    fn checkout(&self, url: &str, destination: &Path) -> Result<()> {
        self.record(
            "checkout",
            SvnCall::Checkout {
                url: url.to_string(),
                destination: destination.to_path_buf(),
            },
        )?;
        for dir in [TRUNK_DIR, ASSETS_DIR, TAGS_DIR] {
            let path = destination.join(dir);
            fs::create_dir_all(&path).map_err(|e| OperationError::filesystem(&path, e))?;
        }
        fs::create_dir_all(destination.join(".svn"))
            .map_err(|e| OperationError::filesystem(destination, e))?;
        for (relative, content) in &self.remote_files {
            let path = destination.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| OperationError::filesystem(parent, e))?;
            }
            fs::write(&path, content).map_err(|e| OperationError::filesystem(&path, e))?;
        }
        Ok(())
    }

    fn update(&self, path: &Path, flags: &[UpdateFlag]) -> Result<()> {
        self.record(
            "update",
            SvnCall::Update {
                path: path.to_path_buf(),
                flags: flags.to_vec(),
            },
        )
    }

    fn missing_items(&self, path: &Path) -> Result<Vec<PathBuf>> {
        Ok(Self::under(&self.missing, path))
    }

    fn untracked_items(&self, path: &Path) -> Result<Vec<PathBuf>> {
        Ok(Self::under(&self.untracked, path))
    }

    fn add(&self, path: &Path) -> Result<()> {
        self.record("add", SvnCall::Add(path.to_path_buf()))
    }

    fn delete(&self, path: &Path) -> Result<()> {
        self.record("delete", SvnCall::Delete(path.to_path_buf()))?;
        if path.is_dir() {
            fs::remove_dir_all(path).map_err(|e| OperationError::filesystem(path, e))?;
        } else if path.exists() {
            fs::remove_file(path).map_err(|e| OperationError::filesystem(path, e))?;
        }
        Ok(())
    }

    fn commit(&self, path: &Path, username: Option<&str>, message: &str) -> Result<()> {
        self.record(
            "commit",
            SvnCall::Commit {
                path: path.to_path_buf(),
                username: username.map(str::to_string),
                message: message.to_string(),
            },
        )
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        self.record(
            "copy",
            SvnCall::Copy {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            },
        )?;
        // Copying onto an existing directory nests the source inside it.
        let target = match (to.is_dir(), from.file_name()) {
            (true, Some(name)) => to.join(name),
            _ => to.to_path_buf(),
        };
        copy_tree(from, &target).map_err(|e| OperationError::filesystem(&target, e))
    }
}

pub struct MockHeaderReader {
    header: FileHeader,
    reads: Mutex<Vec<(PathBuf, PackageType)>>,
}

impl MockHeaderReader {
    #[must_use]
    pub fn with_version(version: &str) -> Self {
        Self {
            header: FileHeader {
                version: Some(version.to_string()),
                ..FileHeader::default()
            },
            reads: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn without_version() -> Self {
        Self {
            header: FileHeader::default(),
            reads: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn reads(&self) -> Vec<(PathBuf, PackageType)> {
        self.reads.lock().expect("lock poisoned").clone()
    }
}

impl HeaderReader for MockHeaderReader {
    fn read_header(&self, path: &Path, package_type: PackageType) -> Result<FileHeader> {
        self.reads
            .lock()
            .expect("lock poisoned")
            .push((path.to_path_buf(), package_type));
        Ok(self.header.clone())
    }
}

/// Accepts exactly one version, as if it were the latest changelog entry.
pub struct MockReadmeChecker {
    declared: String,
}

impl MockReadmeChecker {
    #[must_use]
    pub fn declaring(version: &str) -> Self {
        Self {
            declared: version.to_string(),
        }
    }
}

impl ReadmeChecker for MockReadmeChecker {
    fn check_version(&self, _project_root: &Path, version: &str) -> Result<()> {
        if self.declared == version {
            return Ok(());
        }
        Err(PreflightError::VersionMismatch {
            version: version.to_string(),
            source: ReadmeError::ChangelogMismatch {
                latest: self.declared.clone(),
                version: version.to_string(),
            },
        }
        .into())
    }
}
