use std::path::{Path, PathBuf};

use release_config::{ReleaseConfig, expand_patterns};
use release_core::{CoreError, DEFAULT_BRANCH, PackageType, Parameters};
use tracing::{debug, info};

use crate::Result;
use crate::error::ValidationError;
use crate::traits::{GitProvider, HeaderReader};

/// Values given on the command line; each one wins over the configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub file: Option<PathBuf>,
    pub package_type: Option<PackageType>,
    pub slug: Option<String>,
    pub branch: Option<String>,
    pub username: Option<String>,
    pub build_path: Option<PathBuf>,
}

/// Turns CLI overrides and configuration into validated [`Parameters`].
///
/// Resolution only reads: the project files, the main file header and the
/// current git branch. Nothing is written until it has succeeded.
pub struct ParameterResolver<G, H> {
    git: G,
    header_reader: H,
}

impl<G, H> ParameterResolver<G, H>
where
    G: GitProvider,
    H: HeaderReader,
{
    pub fn new(git: G, header_reader: H) -> Self {
        Self { git, header_reader }
    }

    /// # Errors
    ///
    /// Returns [`ValidationError`] for missing or invalid settings, and a git
    /// error if the current branch cannot be determined.
    pub fn resolve(
        &self,
        source_root: &Path,
        overrides: &CliOverrides,
        config: &ReleaseConfig,
    ) -> Result<Parameters> {
        let repo = &config.release_repo;

        let slug = first_non_empty(overrides.slug.as_deref(), repo.slug.as_deref())
            .ok_or(ValidationError::MissingSlug)?;

        let build_path =
            first_non_empty_path(overrides.build_path.as_ref(), repo.build_path.as_ref())
                .ok_or(ValidationError::MissingBuildPath)?;
        let build_path = source_root.join(build_path);

        let package_type = resolve_package_type(overrides, config)?;

        let asset_files = match &config.files.assets {
            Some(patterns) => expand(source_root, &patterns.to_vec(), "files.assets")?,
            None => Vec::new(),
        };
        let src = config
            .files
            .src
            .as_ref()
            .ok_or(ValidationError::NoFilesToBuild)?;
        let build_files = expand(source_root, &src.to_vec(), "files.src")?;

        let main_file = first_non_empty_path(overrides.file.as_ref(), config.files.main.as_ref())
            .ok_or(ValidationError::MissingMainFile)?;
        let main_file = source_root.join(main_file);
        let header = self.header_reader.read_header(&main_file, package_type)?;
        let version = header
            .version()
            .ok_or_else(|| ValidationError::MissingVersion {
                path: main_file.clone(),
            })?
            .to_string();

        let target_branch =
            first_non_empty(overrides.branch.as_deref(), config.vcs.branch.as_deref())
                .unwrap_or(DEFAULT_BRANCH);
        let username = first_non_empty(overrides.username.as_deref(), repo.username.as_deref())
            .map(str::to_string);

        let original_branch = self.git.current_branch(source_root)?;

        debug!(
            %package_type,
            main_file = %main_file.display(),
            build_files = build_files.len(),
            asset_files = asset_files.len(),
            "resolved release inputs"
        );

        let mut builder = Parameters::builder()
            .original_branch(original_branch)
            .target_branch(target_branch)
            .slug(slug)
            .username(username)
            .version(version)
            .source_root(source_root)
            .build_path(build_path)
            .build_files(build_files)
            .asset_files(asset_files);
        if let Some(url) = non_empty(repo.url.as_deref()) {
            builder = builder.repository_url(url);
        }

        let params = builder.build().map_err(|e| match e {
            CoreError::NoBuildFiles => ValidationError::NoFilesToBuild,
            other => ValidationError::Parameters(other),
        })?;

        info!(
            slug = params.slug(),
            version = params.version(),
            branch = params.target_branch(),
            "release parameters resolved"
        );
        Ok(params)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn first_non_empty<'a>(preferred: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    non_empty(preferred).or_else(|| non_empty(fallback))
}

fn first_non_empty_path<'a>(
    preferred: Option<&'a PathBuf>,
    fallback: Option<&'a PathBuf>,
) -> Option<&'a PathBuf> {
    let present = |path: &&PathBuf| !path.as_os_str().is_empty();
    preferred.filter(present).or_else(|| fallback.filter(present))
}

fn resolve_package_type(overrides: &CliOverrides, config: &ReleaseConfig) -> Result<PackageType> {
    if let Some(package_type) = overrides.package_type {
        return Ok(package_type);
    }
    match non_empty(config.package_type.as_deref()) {
        Some(value) => value.parse::<PackageType>().map_err(|_| {
            ValidationError::InvalidPackageType {
                value: value.to_string(),
            }
            .into()
        }),
        None => Ok(PackageType::default()),
    }
}

fn expand(root: &Path, patterns: &[String], setting: &'static str) -> Result<Vec<PathBuf>> {
    expand_patterns(root, patterns)
        .map_err(|source| ValidationError::InvalidGlob { setting, source }.into())
}
