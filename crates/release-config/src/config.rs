use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Result;
use crate::error::ConfigError;

/// File names probed, in order, by [`discover_config`].
pub const CONFIG_FILE_NAMES: [&str; 2] = [".plugin-release.yml", ".plugin-release.yaml"];

/// A single glob pattern or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Patterns {
    One(String),
    Many(Vec<String>),
}

impl Patterns {
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::One(pattern) => vec![pattern.clone()],
            Self::Many(patterns) => patterns.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesConfig {
    /// Plugin main file or theme stylesheet carrying the version header.
    pub main: Option<PathBuf>,
    /// Patterns for files published to trunk.
    pub src: Option<Patterns>,
    /// Patterns for files published to the repository-level assets directory.
    pub assets: Option<Patterns>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRepoConfig {
    pub slug: Option<String>,
    pub username: Option<String>,
    pub build_path: Option<PathBuf>,
    /// Repository host; the slug is appended to it.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VcsConfig {
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseConfig {
    #[serde(rename = "type")]
    pub package_type: Option<String>,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub release_repo: ReleaseRepoConfig,
    #[serde(default)]
    pub vcs: VcsConfig,
}

impl ReleaseConfig {
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed. `path` is only used for
    /// error reporting.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// # Errors
///
/// Returns an error if the file cannot be read or is not valid YAML.
pub fn load_config(path: &Path) -> Result<ReleaseConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ReleaseConfig::from_yaml(&content, path)
}

/// Loads the first of [`CONFIG_FILE_NAMES`] present in `dir`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if none exists, or a read/parse error.
pub fn discover_config(dir: &Path) -> Result<(PathBuf, ReleaseConfig)> {
    let path = CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| ConfigError::NotFound {
            dir: dir.to_path_buf(),
            expected: CONFIG_FILE_NAMES.join(", "),
        })?;

    let config = load_config(&path)?;
    Ok((path, config))
}
