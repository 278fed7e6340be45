use std::process::Command;

use chrono::Utc;

const RELEASE_TAG_PREFIX: &str = "plugin-release@v";

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");
    println!(
        "cargo:rustc-env=PLUGIN_RELEASE_VERSION={}",
        version_string(version)
    );
}

/// Plain version on a tagged release commit, otherwise `version+hash.date`.
fn version_string(version: &str) -> String {
    let Some(hash) = git(&["rev-parse", "--short", "HEAD"]) else {
        return format!("{version}+unknown.{}", build_date());
    };

    let release_tag = format!("{RELEASE_TAG_PREFIX}{version}");
    let tagged = git(&["tag", "--points-at", "HEAD"])
        .is_some_and(|tags| tags.lines().any(|tag| tag.trim() == release_tag));

    if tagged {
        version.to_owned()
    } else {
        format!("{version}+{hash}.{}", build_date())
    }
}

fn build_date() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8(output.stdout).ok()?.trim().to_owned())
}
