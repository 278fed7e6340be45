use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use release_core::{Parameters, TRUNK_DIR};
use release_svn::{Accept, Depth, UpdateFlag};
use tracing::debug;

use super::context::ReleaseContext;
use crate::Result;
use crate::error::{OperationError, PreflightError};
use crate::file_sync::{self, PopulateOptions};
use crate::traits::{GitProvider, ReadmeChecker, SvnProvider};

/// One step of a release, in the order given by [`ReleaseStage::SEQUENCE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseStage {
    SwitchBranch,
    PreflightCheck,
    CleanBuildDir,
    CheckoutWorkingCopy,
    SyncFiles,
    CommitTrunk,
    CommitAssets,
    CreateTag,
}

impl ReleaseStage {
    /// The build directory is cleaned both before checkout and after tagging.
    pub const SEQUENCE: [ReleaseStage; 9] = [
        Self::SwitchBranch,
        Self::PreflightCheck,
        Self::CleanBuildDir,
        Self::CheckoutWorkingCopy,
        Self::SyncFiles,
        Self::CommitTrunk,
        Self::CommitAssets,
        Self::CreateTag,
        Self::CleanBuildDir,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SwitchBranch => "switch_branch",
            Self::PreflightCheck => "preflight_check",
            Self::CleanBuildDir => "clean_build_dir",
            Self::CheckoutWorkingCopy => "checkout_working_copy",
            Self::SyncFiles => "sync_files",
            Self::CommitTrunk => "commit_trunk",
            Self::CommitAssets => "commit_assets",
            Self::CreateTag => "create_tag",
        }
    }

    /// Whether the stage changes the remote release repository.
    #[must_use]
    pub fn publishes(self) -> bool {
        matches!(
            self,
            Self::CommitTrunk | Self::CommitAssets | Self::CreateTag
        )
    }

    /// Runs this stage alone.
    ///
    /// # Errors
    ///
    /// Returns the underlying git, svn, preflight or filesystem error.
    pub fn run<G, S, R>(self, context: &ReleaseContext<G, S, R>, params: &Parameters) -> Result<()>
    where
        G: GitProvider,
        S: SvnProvider,
        R: ReadmeChecker,
    {
        match self {
            Self::SwitchBranch => context
                .git_provider()
                .checkout_branch(params.source_root(), params.target_branch()),
            Self::PreflightCheck => preflight_check(context, params),
            Self::CleanBuildDir => clean_build_dir(params.build_path()),
            Self::CheckoutWorkingCopy => checkout_working_copy(context.svn_provider(), params),
            Self::SyncFiles => sync_files(params),
            Self::CommitTrunk => commit_changes(
                context.svn_provider(),
                &params.trunk_dir(),
                params.username(),
                &format!("Updates trunk for {}", params.version()),
                false,
            ),
            Self::CommitAssets => commit_changes(
                context.svn_provider(),
                &params.assets_dir(),
                params.username(),
                &format!("Updates assets for {}", params.version()),
                true,
            ),
            Self::CreateTag => create_tag(context.svn_provider(), params),
        }
    }
}

impl fmt::Display for ReleaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn preflight_check<G, S, R>(context: &ReleaseContext<G, S, R>, params: &Parameters) -> Result<()>
where
    G: GitProvider,
    S: SvnProvider,
    R: ReadmeChecker,
{
    if !context
        .git_provider()
        .is_working_tree_clean(params.source_root())?
    {
        return Err(PreflightError::DirtyWorkingTree.into());
    }
    context
        .readme_checker()
        .check_version(params.source_root(), params.version())
}

fn clean_build_dir(build_path: &Path) -> Result<()> {
    match fs::remove_dir_all(build_path) {
        Ok(()) => {
            debug!(path = %build_path.display(), "removed build directory");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(OperationError::filesystem(build_path, e)),
    }
}

fn checkout_working_copy<S: SvnProvider>(svn: &S, params: &Parameters) -> Result<()> {
    svn.checkout(&params.repository_url(), params.build_path())?;
    let infinity = [UpdateFlag::SetDepth(Depth::Infinity)];
    svn.update(&params.trunk_dir(), &infinity)?;
    svn.update(&params.assets_dir(), &infinity)
}

fn sync_files(params: &Parameters) -> Result<()> {
    let trunk = params.trunk_dir();
    let assets = params.assets_dir();
    let preserve = PopulateOptions::preserve(params.source_root());
    let flatten = PopulateOptions::flatten();

    let removed_trunk = file_sync::reconcile(
        &trunk,
        &file_sync::list_relative(&trunk)?,
        &preserve.relative_targets(params.build_files()),
    );
    let removed_assets = file_sync::reconcile(
        &assets,
        &file_sync::list_relative(&assets)?,
        &flatten.relative_targets(params.asset_files()),
    );

    let copied_trunk = file_sync::populate(params.build_files(), &trunk, &preserve)?;
    fs::create_dir_all(&assets).map_err(|e| OperationError::filesystem(&assets, e))?;
    let copied_assets = file_sync::populate(params.asset_files(), &assets, &flatten)?;

    debug!(
        removed = removed_trunk.len() + removed_assets.len(),
        copied = copied_trunk.len() + copied_assets.len(),
        "synchronized working copy"
    );
    Ok(())
}

fn commit_changes<S: SvnProvider>(
    svn: &S,
    dir: &Path,
    username: Option<&str>,
    message: &str,
    keep_local_on_conflict: bool,
) -> Result<()> {
    for missing in svn.missing_items(dir)? {
        svn.delete(&missing)?;
    }
    for untracked in svn.untracked_items(dir)? {
        svn.add(&untracked)?;
    }
    if keep_local_on_conflict {
        svn.update(dir, &[UpdateFlag::Accept(Accept::MineFull)])?;
    }
    svn.commit(dir, username, message)
}

fn create_tag<S: SvnProvider>(svn: &S, params: &Parameters) -> Result<()> {
    let trunk = params.trunk_dir();
    let tag = params.tag_dir();

    svn.update(&tag, &[])?;
    svn.copy(&trunk, &tag)?;

    // Copying onto an existing tag lands the source inside it.
    let nested = tag.join(TRUNK_DIR);
    if nested.exists() {
        svn.delete(&nested)?;
    }

    svn.commit(
        &tag,
        params.username(),
        &format!("Creates tag {}", params.version()),
    )
}
