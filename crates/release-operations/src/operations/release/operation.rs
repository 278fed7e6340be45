use release_core::Parameters;
use tracing::{info, warn};

use super::context::ReleaseContext;
use super::guard::BranchRestoreGuard;
use super::stage::ReleaseStage;
use crate::Result;
use crate::error::OperationError;
use crate::traits::{GitProvider, ReadmeChecker, SvnProvider};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseInput {
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct ReleaseOutput {
    pub tag_url: String,
    /// Stages that ran, or for a dry run the stages that would run.
    pub stages: Vec<ReleaseStage>,
}

#[derive(Debug)]
pub enum ReleaseOutcome {
    DryRun(ReleaseOutput),
    Executed(ReleaseOutput),
}

impl ReleaseOutcome {
    #[must_use]
    pub fn output(&self) -> &ReleaseOutput {
        match self {
            Self::DryRun(output) | Self::Executed(output) => output,
        }
    }
}

/// Publishes a build by running every [`ReleaseStage`] in order.
pub struct ReleaseOperation<G, S, R> {
    context: ReleaseContext<G, S, R>,
}

impl<G, S, R> ReleaseOperation<G, S, R>
where
    G: GitProvider,
    S: SvnProvider,
    R: ReadmeChecker,
{
    pub fn new(git_provider: G, svn_provider: S, readme_checker: R) -> Self {
        Self {
            context: ReleaseContext::new(git_provider, svn_provider, readme_checker),
        }
    }

    #[must_use]
    pub fn context(&self) -> &ReleaseContext<G, S, R> {
        &self.context
    }

    /// Runs the release, stopping at the first failing stage.
    ///
    /// The original branch is checked out again on every exit path. Stages
    /// already committed to the release repository are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::StageFailed`] naming the stage that failed.
    pub fn execute(&self, params: &Parameters, input: &ReleaseInput) -> Result<ReleaseOutcome> {
        let tag_url = params.tag_url();

        if input.dry_run {
            for stage in ReleaseStage::SEQUENCE {
                info!(%stage, "dry run: would run stage");
            }
            return Ok(ReleaseOutcome::DryRun(ReleaseOutput {
                tag_url,
                stages: ReleaseStage::SEQUENCE.to_vec(),
            }));
        }

        let _restore = BranchRestoreGuard::new(
            self.context.git_provider(),
            params.source_root(),
            params.original_branch(),
        );

        let mut completed = Vec::with_capacity(ReleaseStage::SEQUENCE.len());
        for stage in ReleaseStage::SEQUENCE {
            info!(%stage, "running release stage");
            if let Err(source) = stage.run(&self.context, params) {
                if completed.iter().any(|done: &ReleaseStage| done.publishes()) {
                    warn!(%stage, "release repository was partially updated");
                }
                return Err(OperationError::StageFailed {
                    stage,
                    source: Box::new(source),
                });
            }
            completed.push(stage);
        }

        info!(tag_url = %tag_url, "release created");
        Ok(ReleaseOutcome::Executed(ReleaseOutput {
            tag_url,
            stages: completed,
        }))
    }
}
