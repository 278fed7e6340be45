use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::status::parse_status;
use crate::types::{StatusCode, StatusEntry, UpdateFlag};
use crate::{Result, SvnError};

/// Runs `svn` subcommands against local working copies.
#[derive(Debug, Clone)]
pub struct SvnClient {
    binary: PathBuf,
}

impl Default for SvnClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SvnClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("svn"),
        }
    }

    #[must_use]
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if `svn checkout` fails.
    pub fn checkout(&self, url: &str, destination: &Path) -> Result<()> {
        self.run(checkout_args(url, destination))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if `svn update` fails.
    pub fn update(&self, path: &Path, flags: &[UpdateFlag]) -> Result<()> {
        self.run(update_args(path, flags))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if `svn status` fails.
    pub fn status(&self, path: &Path) -> Result<Vec<StatusEntry>> {
        let stdout = self.run(vec![
            "status".into(),
            "--non-interactive".into(),
            target(path),
        ])?;
        Ok(parse_status(&stdout))
    }

    /// Tracked items that no longer exist on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if `svn status` fails.
    pub fn missing_items(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.items_with_code(path, StatusCode::Missing)
    }

    /// Items on disk that are not under version control.
    ///
    /// # Errors
    ///
    /// Returns an error if `svn status` fails.
    pub fn untracked_items(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.items_with_code(path, StatusCode::Unversioned)
    }

    /// # Errors
    ///
    /// Returns an error if `svn add` fails.
    pub fn add(&self, path: &Path) -> Result<()> {
        self.run(vec!["add".into(), "--non-interactive".into(), target(path)])?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if `svn delete` fails.
    pub fn delete(&self, path: &Path) -> Result<()> {
        self.run(vec![
            "delete".into(),
            "--force".into(),
            "--non-interactive".into(),
            target(path),
        ])?;
        Ok(())
    }

    /// Commits `path`, inheriting the terminal so svn can prompt for a password.
    ///
    /// # Errors
    ///
    /// Returns an error if `svn commit` fails.
    pub fn commit(&self, path: &Path, username: Option<&str>, message: &str) -> Result<()> {
        self.run_attached(commit_args(path, username, message))
    }

    /// # Errors
    ///
    /// Returns an error if `svn copy` fails.
    pub fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        self.run(vec![
            "copy".into(),
            "--non-interactive".into(),
            target(from),
            target(to),
        ])?;
        Ok(())
    }

    fn items_with_code(&self, path: &Path, code: StatusCode) -> Result<Vec<PathBuf>> {
        Ok(self
            .status(path)?
            .into_iter()
            .filter(|entry| entry.code == code)
            .map(|entry| entry.path)
            .collect())
    }

    fn command(&self, args: &[OsString]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args);
        // Stable, parseable output regardless of the user's locale.
        cmd.env("LC_MESSAGES", "C");
        cmd
    }

    fn run(&self, args: Vec<OsString>) -> Result<String> {
        let command = self.display(&args);
        debug!(%command, "running svn");

        let output = self
            .command(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SvnError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SvnError::CommandFailed {
                command,
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn run_attached(&self, args: Vec<OsString>) -> Result<()> {
        let command = self.display(&args);
        debug!(%command, "running svn attached to terminal");

        let status = self
            .command(&args)
            .status()
            .map_err(|source| SvnError::Spawn {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SvnError::CommandFailed {
                command,
                status: status.code(),
                stderr: String::new(),
            })
        }
    }

    fn display(&self, args: &[OsString]) -> String {
        std::iter::once(self.binary.as_os_str())
            .chain(args.iter().map(OsString::as_os_str))
            .map(OsStr::to_string_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Working copy target argument.
///
/// svn treats the last `@` in a target as a peg revision separator, so paths
/// containing `@` (retina assets like `icon@2x.png`) need a trailing `@`.
fn target(path: &Path) -> OsString {
    let mut arg = path.as_os_str().to_os_string();
    if path.to_string_lossy().contains('@') {
        arg.push("@");
    }
    arg
}

fn checkout_args(url: &str, destination: &Path) -> Vec<OsString> {
    vec![
        "checkout".into(),
        "--depth".into(),
        "immediates".into(),
        "--non-interactive".into(),
        url.into(),
        destination.as_os_str().to_os_string(),
    ]
}

fn update_args(path: &Path, flags: &[UpdateFlag]) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["update".into(), "--non-interactive".into()];
    for flag in flags {
        args.extend(flag.to_args());
    }
    args.push(target(path));
    args
}

fn commit_args(path: &Path, username: Option<&str>, message: &str) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["commit".into(), target(path), "-m".into(), message.into()];
    if let Some(username) = username {
        args.push("--username".into());
        args.push(username.into());
    }
    args
}
