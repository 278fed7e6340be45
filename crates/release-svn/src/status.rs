use std::path::PathBuf;

use crate::types::{StatusCode, StatusEntry};

/// Width of the flag columns preceding the path in `svn status` output.
const FLAG_COLUMNS: usize = 7;

/// Parses `svn status` output into entries.
///
/// Lines that are not item rows (external headers, conflict summaries,
/// changelist banners) are skipped.
#[must_use]
pub fn parse_status(output: &str) -> Vec<StatusEntry> {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<StatusEntry> {
    let code = StatusCode::from_char(line.chars().next()?)?;

    if line.as_bytes().get(FLAG_COLUMNS) != Some(&b' ') {
        return None;
    }

    let path = line.get(FLAG_COLUMNS + 1..)?.trim_end();
    if path.is_empty() {
        return None;
    }

    Some(StatusEntry {
        code,
        path: PathBuf::from(path),
    })
}
