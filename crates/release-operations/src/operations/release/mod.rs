mod context;
mod guard;
mod operation;
mod stage;

pub use context::ReleaseContext;
pub use guard::BranchRestoreGuard;
pub use operation::{ReleaseInput, ReleaseOperation, ReleaseOutcome, ReleaseOutput};
pub use stage::ReleaseStage;
