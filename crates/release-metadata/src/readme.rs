use std::path::{Path, PathBuf};

use crate::error::ReadmeError;

/// Probed in order by [`find_readme`].
pub const README_FILE_NAMES: [&str; 4] = ["readme.txt", "README.txt", "readme.md", "README.md"];

/// Stable tag value meaning "serve trunk"; it pins no version.
const TRUNK_STABLE_TAG: &str = "trunk";

/// Version declarations found in a readme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readme {
    pub stable_tag: Option<String>,
    pub latest_changelog: Option<String>,
}

#[must_use]
pub fn find_readme(dir: &Path) -> Option<PathBuf> {
    README_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Extracts the `Stable tag` header and the first changelog entry.
///
/// Understands both the `== Section ==` / `= 1.0 =` readme.txt layout and the
/// `## Section` / `### 1.0` markdown layout.
#[must_use]
pub fn parse_readme(content: &str) -> Readme {
    let mut readme = Readme::default();
    let mut changelog_level: Option<(char, usize)> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        if readme.stable_tag.is_none() {
            if let Some(tag) = stable_tag(trimmed) {
                readme.stable_tag = Some(tag);
                continue;
            }
        }

        let Some((marker, level, title)) = heading(trimmed) else {
            continue;
        };

        match changelog_level {
            None => {
                if is_section(marker, level) && title.eq_ignore_ascii_case("changelog") {
                    changelog_level = Some((marker, level));
                }
            }
            Some((section_marker, section_level)) => {
                if marker == section_marker && ends_section(marker, level, section_level) {
                    break;
                }
                if let Some(version) = entry_version(title) {
                    readme.latest_changelog = Some(version);
                    break;
                }
            }
        }
    }

    readme
}

/// Fails if the readme in `dir` declares a version other than `version`.
///
/// # Errors
///
/// Returns [`ReadmeError::NotFound`] without a readme, and a mismatch error
/// when the stable tag or latest changelog entry disagrees with `version`.
pub fn check_version(dir: &Path, version: &str) -> Result<Readme, ReadmeError> {
    let path = find_readme(dir).ok_or_else(|| ReadmeError::NotFound {
        dir: dir.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(&path).map_err(|source| ReadmeError::Read {
        path: path.clone(),
        source,
    })?;

    let readme = parse_readme(&content);

    if let Some(stable_tag) = &readme.stable_tag {
        if stable_tag != TRUNK_STABLE_TAG && stable_tag != version {
            return Err(ReadmeError::StableTagMismatch {
                stable_tag: stable_tag.clone(),
                version: version.to_string(),
            });
        }
    }

    if let Some(latest) = &readme.latest_changelog {
        if latest != version {
            return Err(ReadmeError::ChangelogMismatch {
                latest: latest.clone(),
                version: version.to_string(),
            });
        }
    }

    Ok(readme)
}

fn stable_tag(line: &str) -> Option<String> {
    let line = line.replace('*', "");
    let line = line.trim();
    let key = line.get(.."Stable tag".len())?;
    if !key.eq_ignore_ascii_case("Stable tag") {
        return None;
    }
    let value = line["Stable tag".len()..].trim_start().strip_prefix(':')?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Splits `== Title ==` / `## Title` into marker, depth and title.
fn heading(line: &str) -> Option<(char, usize, &str)> {
    let marker = line.chars().next().filter(|c| *c == '=' || *c == '#')?;
    let level = line.chars().take_while(|c| *c == marker).count();
    let title = line.trim_matches(marker).trim();
    Some((marker, level, title))
}

fn is_section(marker: char, level: usize) -> bool {
    level == 2 && (marker == '=' || marker == '#')
}

/// readme.txt nests with fewer `=`, markdown with more `#`.
fn ends_section(marker: char, level: usize, section_level: usize) -> bool {
    if marker == '=' {
        level >= section_level
    } else {
        level <= section_level
    }
}

/// Version token of a changelog entry heading such as `1.2.0 - 2024-01-01`.
fn entry_version(title: &str) -> Option<String> {
    let token = title.split_whitespace().next()?;
    let token = token.trim_matches(|c| c == '[' || c == ']');
    let token = token
        .strip_prefix('v')
        .or_else(|| token.strip_prefix('V'))
        .unwrap_or(token);
    token
        .starts_with(|c: char| c.is_ascii_digit())
        .then(|| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const README_TXT: &str = "=== My Plugin ===
Contributors: jane
Tags: tools
Requires at least: 6.0
Stable tag: 2.0.0
License: GPLv2

A short description.

== Description ==

Long description.

== Changelog ==

= 2.0.0 - 2024-05-01 =
* New feature.

= 1.9.0 =
* Fix.

== Upgrade Notice ==

= 3.0.0 =
Not a changelog entry.
";

    #[test]
    fn parses_readme_txt() {
        let readme = parse_readme(README_TXT);

        assert_eq!(readme.stable_tag.as_deref(), Some("2.0.0"));
        assert_eq!(readme.latest_changelog.as_deref(), Some("2.0.0"));
    }

    #[test]
    fn parses_markdown_readme() {
        let content = "# My Plugin

**Stable tag:** 1.3.0

## Changelog

### v1.3.0
- Added things.

### 1.2.0
- Older.
";

        let readme = parse_readme(content);

        assert_eq!(readme.stable_tag.as_deref(), Some("1.3.0"));
        assert_eq!(readme.latest_changelog.as_deref(), Some("1.3.0"));
    }

    #[test]
    fn empty_changelog_section_has_no_entry() {
        let content = "== Changelog ==\n\n== FAQ ==\n\n= 1.0 =\n";

        let readme = parse_readme(content);

        assert_eq!(readme.latest_changelog, None);
    }

    #[test]
    fn missing_sections_yield_nothing() {
        assert_eq!(parse_readme("=== Plugin ===\nJust text.\n"), Readme::default());
    }

    #[test]
    fn bracketed_versions_are_unwrapped() {
        let readme = parse_readme("## Changelog\n\n### [4.1.0] - 2024-02-02\n");

        assert_eq!(readme.latest_changelog.as_deref(), Some("4.1.0"));
    }

    #[test]
    fn non_version_entry_headings_are_skipped() {
        let readme = parse_readme("== Changelog ==\n= Unreleased =\n= 1.0.1 =\n");

        assert_eq!(readme.latest_changelog.as_deref(), Some("1.0.1"));
    }

    #[test]
    fn stable_tag_with_extra_spacing() {
        assert_eq!(stable_tag("Stable tag : 1.0").as_deref(), Some("1.0"));
        assert_eq!(stable_tag("stable TAG: trunk").as_deref(), Some("trunk"));
        assert_eq!(stable_tag("Stable tagline: nope"), None);
    }
}
