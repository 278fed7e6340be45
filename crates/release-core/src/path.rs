//! Path normalization helpers.
//!
//! Relativization works on path components rather than string offsets, so
//! mixed separators and trailing slashes never shift the result.

use std::path::{Component, Path, PathBuf};

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Returns `path` with exactly one trailing `/`.
#[must_use]
pub fn trailing_slash(path: &str) -> String {
    format!("{}/", untrailing_slash(path))
}

/// Returns `path` without any trailing separators.
#[must_use]
pub fn untrailing_slash(path: &str) -> String {
    path.trim_end_matches(SEPARATORS).to_string()
}

/// Strips `base` from `path`.
///
/// Returns `None` when `path` does not live under `base`. A `path` equal to
/// `base` yields an empty path.
#[must_use]
pub fn relativize(path: &Path, base: &Path) -> Option<PathBuf> {
    let path = normalize(path);
    let base = normalize(base);
    path.strip_prefix(&base).ok().map(Path::to_path_buf)
}

/// Like [`relativize`], rendered with `/` separators.
///
/// Returns `None` when `path` is not under `base` or equals it.
#[must_use]
pub fn relative_string(path: &Path, base: &Path) -> Option<String> {
    let relative = relativize(path, base)?;
    let joined = to_slash(&relative);
    if joined.is_empty() { None } else { Some(joined) }
}

/// Final component of `path` as a string.
#[must_use]
pub fn base_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Renders a relative path with `/` separators regardless of platform.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
