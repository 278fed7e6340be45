use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::CoreError;
use crate::path::trailing_slash;

pub const DEFAULT_REPOSITORY_URL: &str = "https://plugins.svn.wordpress.org";
pub const DEFAULT_BRANCH: &str = "master";

pub const TRUNK_DIR: &str = "trunk";
pub const ASSETS_DIR: &str = "assets";
pub const TAGS_DIR: &str = "tags";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum PackageType {
    #[default]
    Plugin,
    Theme,
}

impl PackageType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plugin => "plugin",
            Self::Theme => "theme",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plugin" => Ok(Self::Plugin),
            "theme" => Ok(Self::Theme),
            _ => Err(CoreError::UnknownPackageType(s.to_string())),
        }
    }
}

/// Everything a release run needs, resolved and validated up front.
///
/// Built once through [`ParametersBuilder`] and never mutated; every release
/// stage reads from the same instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    original_branch: String,
    target_branch: String,
    slug: String,
    username: Option<String>,
    version: String,
    source_root: PathBuf,
    build_path: PathBuf,
    build_files: Vec<PathBuf>,
    asset_files: Vec<PathBuf>,
    repository_url: String,
}

impl Parameters {
    #[must_use]
    pub fn builder() -> ParametersBuilder {
        ParametersBuilder::default()
    }

    #[must_use]
    pub fn original_branch(&self) -> &str {
        &self.original_branch
    }

    #[must_use]
    pub fn target_branch(&self) -> &str {
        &self.target_branch
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    #[must_use]
    pub fn build_path(&self) -> &Path {
        &self.build_path
    }

    #[must_use]
    pub fn build_files(&self) -> &[PathBuf] {
        &self.build_files
    }

    #[must_use]
    pub fn asset_files(&self) -> &[PathBuf] {
        &self.asset_files
    }

    #[must_use]
    pub fn trunk_dir(&self) -> PathBuf {
        self.build_path.join(TRUNK_DIR)
    }

    #[must_use]
    pub fn assets_dir(&self) -> PathBuf {
        self.build_path.join(ASSETS_DIR)
    }

    #[must_use]
    pub fn tag_dir(&self) -> PathBuf {
        self.build_path.join(TAGS_DIR).join(&self.version)
    }

    /// URL of the package root in the release repository.
    #[must_use]
    pub fn repository_url(&self) -> String {
        format!("{}{}", trailing_slash(&self.repository_url), self.slug)
    }

    /// URL reported once the tag has been created.
    #[must_use]
    pub fn tag_url(&self) -> String {
        format!("{}/{}", self.repository_url(), self.version)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParametersBuilder {
    original_branch: Option<String>,
    target_branch: Option<String>,
    slug: Option<String>,
    username: Option<String>,
    version: Option<String>,
    source_root: Option<PathBuf>,
    build_path: Option<PathBuf>,
    build_files: Vec<PathBuf>,
    asset_files: Vec<PathBuf>,
    repository_url: Option<String>,
}

impl ParametersBuilder {
    #[must_use]
    pub fn original_branch(mut self, branch: impl Into<String>) -> Self {
        self.original_branch = Some(branch.into());
        self
    }

    #[must_use]
    pub fn target_branch(mut self, branch: impl Into<String>) -> Self {
        self.target_branch = Some(branch.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = Some(root.into());
        self
    }

    #[must_use]
    pub fn build_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.build_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn build_files(mut self, files: Vec<PathBuf>) -> Self {
        self.build_files = files;
        self
    }

    #[must_use]
    pub fn asset_files(mut self, files: Vec<PathBuf>) -> Self {
        self.asset_files = files;
        self
    }

    #[must_use]
    pub fn repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = Some(url.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`CoreError::MissingParameter`] when `slug`, `version` or
    /// `build_path` is absent or empty, [`CoreError::RelativeBuildPath`] for a
    /// relative build path, and [`CoreError::NoBuildFiles`] when nothing is
    /// left to build once asset files are excluded.
    pub fn build(self) -> Result<Parameters, CoreError> {
        let slug = required(self.slug, "slug")?;
        let version = required(self.version, "version")?;

        let build_path = self
            .build_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(CoreError::MissingParameter("buildPath"))?;
        if !build_path.is_absolute() {
            return Err(CoreError::RelativeBuildPath(
                build_path.display().to_string(),
            ));
        }

        let asset_files = self.asset_files;
        let build_files: Vec<PathBuf> = self
            .build_files
            .into_iter()
            .filter(|file| !asset_files.contains(file))
            .collect();
        if build_files.is_empty() {
            return Err(CoreError::NoBuildFiles);
        }

        let target_branch = self
            .target_branch
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string());
        let original_branch = self
            .original_branch
            .unwrap_or_else(|| target_branch.clone());

        Ok(Parameters {
            original_branch,
            target_branch,
            slug,
            username: self.username.filter(|name| !name.is_empty()),
            version,
            source_root: self.source_root.unwrap_or_default(),
            build_path,
            build_files,
            asset_files,
            repository_url: self
                .repository_url
                .unwrap_or_else(|| DEFAULT_REPOSITORY_URL.to_string()),
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, CoreError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(CoreError::MissingParameter(name))
}
