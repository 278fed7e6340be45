mod release;
mod resolve;

pub use release::{
    BranchRestoreGuard, ReleaseContext, ReleaseInput, ReleaseOperation, ReleaseOutcome,
    ReleaseOutput, ReleaseStage,
};
pub use resolve::{CliOverrides, ParameterResolver};
