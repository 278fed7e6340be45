mod error;
mod header;
mod readme;

pub use error::{MetadataError, ReadmeError};
pub use header::{FileHeader, HEADER_SCAN_BYTES, parse_header, read_header};
pub use readme::{README_FILE_NAMES, Readme, check_version, find_readme, parse_readme};
