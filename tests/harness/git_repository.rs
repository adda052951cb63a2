use std::path::Path;

pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub(crate) fn init_repo(repo_dir: &Path) {
    git(repo_dir, &["init", "--initial-branch=main"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
    git(repo_dir, &["config", "user.email", "test@example.com"]);
}

pub(crate) fn init_bare_repo(path: &Path) {
    std::fs::create_dir_all(path).expect("Failed to create bare repo directory");
    git(path, &["init", "--bare", "--initial-branch=main"]);
}

pub(crate) fn add_origin_remote(repo_dir: &Path, url: &str) {
    git(repo_dir, &["remote", "add", "origin", url]);
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-m", message]);
}

/// `git status --porcelain` output; empty when the tree is clean.
pub(crate) fn status(repo_dir: &Path) -> String {
    git(repo_dir, &["status", "--porcelain"])
}

/// Subject lines on `branch` of the repository at `git_dir`, newest first.
pub(crate) fn log_subjects(git_dir: &Path, branch: &str) -> Vec<String> {
    git(git_dir, &["log", "--format=%s", branch]).lines().map(str::to_string).collect()
}
