use std::fs::File;
use std::io::Read;
use std::path::Path;

use release_core::PackageType;

use crate::error::MetadataError;

/// Only the start of the main file is scanned for header fields.
pub const HEADER_SCAN_BYTES: u64 = 8 * 1024;

/// Header fields declared in a plugin main file or theme stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHeader {
    pub name: Option<String>,
    pub version: Option<String>,
    pub requires_wp: Option<String>,
    pub requires_php: Option<String>,
    pub text_domain: Option<String>,
}

impl FileHeader {
    /// Declared version, if present and non-empty.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }
}

/// # Errors
///
/// Returns [`MetadataError::Read`] if the file cannot be opened or read.
pub fn read_header(path: &Path, package_type: PackageType) -> Result<FileHeader, MetadataError> {
    let read_error = |source| MetadataError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut bytes = Vec::new();
    file.take(HEADER_SCAN_BYTES)
        .read_to_end(&mut bytes)
        .map_err(read_error)?;

    Ok(parse_header(&String::from_utf8_lossy(&bytes), package_type))
}

#[must_use]
pub fn parse_header(content: &str, package_type: PackageType) -> FileHeader {
    let content = content.replace('\r', "\n");
    let name_key = match package_type {
        PackageType::Plugin => "Plugin Name",
        PackageType::Theme => "Theme Name",
    };

    FileHeader {
        name: header_value(&content, name_key),
        version: header_value(&content, "Version"),
        requires_wp: header_value(&content, "Requires at least"),
        requires_php: header_value(&content, "Requires PHP"),
        text_domain: header_value(&content, "Text Domain"),
    }
}

/// First `key: value` line, ignoring comment decoration before the key.
fn header_value(content: &str, key: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let line = line.trim_start_matches([' ', '\t']);
        let line = line.strip_prefix("<?php").unwrap_or(line);
        let line = line.trim_start_matches([' ', '\t', '/', '*', '#', '@']);

        let candidate = line.get(..key.len())?;
        if !candidate.eq_ignore_ascii_case(key) {
            return None;
        }
        let value = line[key.len()..].strip_prefix(':')?;
        Some(strip_comment_close(value))
    })
}

fn strip_comment_close(value: &str) -> String {
    let end = [value.find("*/"), value.find("?>")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(value.len());
    value[..end].trim().to_string()
}
