use std::env;
use std::path::Path;
use std::process::Command;

const COMMIT_OVERRIDE: &str = "FLOODSENSOR_COMMIT";
const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={COMMIT_OVERRIDE}");
    let git_head = Path::new("../../.git/HEAD");
    if git_head.exists() {
        println!("cargo:rerun-if-changed={}", git_head.display());
    }

    // Source tarballs have no git metadata; packagers pass the commit in.
    let commit = env::var(COMMIT_OVERRIDE)
        .ok()
        .map(|sha| sha.trim().chars().take(7).collect::<String>())
        .filter(|sha| !sha.is_empty())
        .or_else(|| git(&["rev-parse", "--short=7", "HEAD"]))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let date = git(&["log", "-1", "--format=%cs"]).unwrap_or_else(|| UNKNOWN.to_string());

    println!("cargo:rustc-env=FLOODSENSOR_BUILD_COMMIT={commit}");
    println!("cargo:rustc-env=FLOODSENSOR_BUILD_DATE={date}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|value| !value.is_empty())
}
