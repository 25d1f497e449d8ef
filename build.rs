fn main() {
    // Rebuild when the git HEAD or refs move so the version string stays
    // accurate.
    let git_dir = std::process::Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string());

    if let Some(git_dir) = git_dir.as_deref() {
        let git_path = std::path::Path::new(git_dir);
        for rel in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            if git_path.join(rel).exists() {
                println!("cargo:rerun-if-changed={git_dir}/{rel}");
            }
        }
    }

    let git_info = std::process::Command::new("git")
        .args(["describe", "--always", "--tags", "--long", "--dirty"])
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=_GIT_INFO={git_info}");
}
