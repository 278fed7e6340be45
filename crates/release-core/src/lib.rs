pub mod diff;
pub mod error;
pub mod path;
pub mod types;

pub use diff::{DiffEntry, DiffKind, diff, removed_values};
pub use error::*;
pub use types::*;
