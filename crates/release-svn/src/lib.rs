//! Thin wrapper over the `svn` command-line client.
//!
//! Only the subset needed to publish a release is covered: checkout, update,
//! status, add, delete, commit and copy.

mod client;
mod error;
mod status;
mod types;

pub use client::SvnClient;
pub use error::SvnError;
pub use status::parse_status;
pub use types::{Accept, Depth, StatusCode, StatusEntry, UpdateFlag};

pub type Result<T> = std::result::Result<T, SvnError>;
