use std::fs;

use release_core::PackageType;
use release_metadata::{ReadmeError, check_version, read_header};
use tempfile::TempDir;

fn write_readme(dir: &TempDir, stable_tag: &str, latest: &str) -> anyhow::Result<()> {
    fs::write(
        dir.path().join("readme.txt"),
        format!(
            "=== My Plugin ===\nStable tag: {stable_tag}\n\n== Changelog ==\n\n= {latest} =\n* Changes.\n"
        ),
    )?;
    Ok(())
}

#[test]
fn matching_readme_passes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_readme(&dir, "2.0.0", "2.0.0")?;

    let readme = check_version(dir.path(), "2.0.0")?;

    assert_eq!(readme.latest_changelog.as_deref(), Some("2.0.0"));
    Ok(())
}

#[test]
fn outdated_changelog_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_readme(&dir, "2.0.0", "1.9.0")?;

    let result = check_version(dir.path(), "2.0.0");

    assert!(matches!(
        result,
        Err(ReadmeError::ChangelogMismatch { ref latest, ref version })
            if latest == "1.9.0" && version == "2.0.0"
    ));
    Ok(())
}

#[test]
fn outdated_stable_tag_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_readme(&dir, "1.9.0", "2.0.0")?;

    let result = check_version(dir.path(), "2.0.0");

    assert!(matches!(result, Err(ReadmeError::StableTagMismatch { .. })));
    Ok(())
}

#[test]
fn trunk_stable_tag_is_accepted() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_readme(&dir, "trunk", "2.0.0")?;

    check_version(dir.path(), "2.0.0")?;
    Ok(())
}

#[test]
fn missing_readme_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    let result = check_version(dir.path(), "1.0.0");

    assert!(matches!(result, Err(ReadmeError::NotFound { .. })));
    Ok(())
}

#[test]
fn header_is_read_from_main_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let main = dir.path().join("my-plugin.php");
    fs::write(&main, "<?php\n/*\n * Plugin Name: My Plugin\n * Version: 2.0.0\n */\n")?;

    let header = read_header(&main, PackageType::Plugin)?;

    assert_eq!(header.version(), Some("2.0.0"));
    Ok(())
}

#[test]
fn header_beyond_scan_window_is_ignored() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let main = dir.path().join("late.php");
    let padding = "// filler line\n".repeat(1024);
    fs::write(&main, format!("<?php\n{padding}/* Version: 9.9.9 */\n"))?;

    let header = read_header(&main, PackageType::Plugin)?;

    assert_eq!(header.version(), None);
    Ok(())
}

#[test]
fn missing_main_file_is_read_error() {
    let result = read_header(std::path::Path::new("/nonexistent/plugin.php"), PackageType::Plugin);

    assert!(result.is_err());
}
