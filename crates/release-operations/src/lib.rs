mod error;
pub mod file_sync;
pub mod operations;
pub mod providers;
pub mod traits;

#[cfg(test)]
pub mod mocks;

pub use error::{OperationError, PreflightError, Result, ValidationError};
