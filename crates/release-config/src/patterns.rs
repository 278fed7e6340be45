use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, glob_with};
use indexmap::IndexSet;

use crate::Result;
use crate::error::ConfigError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Expands `patterns` relative to `root` into absolute paths.
///
/// Patterns are applied in order. A pattern starting with `!` removes
/// everything matched so far that it matches. Results keep first-match order
/// without duplicates. Hidden entries are only matched when the pattern
/// spells out the leading dot. Zero matches is not an error.
///
/// # Errors
///
/// Returns [`ConfigError::GlobPattern`] for an invalid pattern, or
/// [`ConfigError::GlobIteration`] if a matched directory cannot be read.
pub fn expand_patterns(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut matches: IndexSet<PathBuf> = IndexSet::new();

    for pattern in patterns {
        if let Some(negated) = pattern.strip_prefix('!') {
            let absolute = absolute_pattern(root, negated);
            let matcher = Pattern::new(&absolute).map_err(|source| ConfigError::GlobPattern {
                pattern: pattern.clone(),
                source,
            })?;
            matches.retain(|path| !matcher.matches_path_with(path, MATCH_OPTIONS));
            continue;
        }

        let absolute = absolute_pattern(root, pattern);
        let paths = glob_with(&absolute, MATCH_OPTIONS).map_err(|source| {
            ConfigError::GlobPattern {
                pattern: pattern.clone(),
                source,
            }
        })?;
        for path in paths {
            matches.insert(path?);
        }
    }

    Ok(matches.into_iter().collect())
}

fn absolute_pattern(root: &Path, pattern: &str) -> String {
    if Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    let root = Pattern::escape(&root.to_string_lossy());
    format!("{}/{pattern}", root.trim_end_matches('/'))
}
