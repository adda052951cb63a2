//! Shared testing harness for `bntf-docs` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_repository;

/// Owner written into the test archive configuration.
pub(crate) const OWNER: &str = "bntf-test";

/// Minimal bytes that pass as a PDF for the archive.
pub(crate) const PDF_BYTES: &[u8] = b"%PDF-1.7\n%test\n";

/// Testing harness providing an isolated archive for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create an isolated archive directory initialized as a git repository on `main`.
    pub(crate) fn new() -> Self {
        let ctx = Self::without_git();
        git_repository::init_repo(ctx.work_dir());
        ctx
    }

    /// Create an isolated archive directory that is not a git repository.
    pub(crate) fn without_git() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("archive");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Scratch directory outside the archive.
    pub(crate) fn scratch(&self) -> &Path {
        self.root.path()
    }

    /// Path to the archive directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `bntf-docs` binary within the archive.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `bntf-docs` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("bntf-docs").expect("Failed to locate bntf-docs binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.scratch())
            .env_remove("GITHUB_TOKEN")
            .env_remove("GITHUB_REPOSITORY")
            .env_remove("BNTF_DOCS_LOG");
        cmd
    }

    /// Write `bntf-docs.toml` with the test owner plus `extra` TOML.
    pub(crate) fn write_config(&self, extra: &str) {
        let content = format!("[repository]\nowner = \"{OWNER}\"\n\n{extra}");
        self.write_file("bntf-docs.toml", content.as_bytes());
    }

    /// Write the config and run `bntf-docs init`, asserting success.
    pub(crate) fn init_archive(&self) {
        self.write_config("");
        self.cli().arg("init").assert().success();
    }

    /// Write a file relative to the archive root, creating parent folders.
    pub(crate) fn write_file(&self, relative: &str, content: &[u8]) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write archive file");
    }

    /// Write a PDF outside the archive and return its path.
    pub(crate) fn source_pdf(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join("incoming");
        fs::create_dir_all(&dir).expect("Failed to create incoming directory");
        let path = dir.join(name);
        fs::write(&path, PDF_BYTES).expect("Failed to write source PDF");
        path
    }

    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    pub(crate) fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }

    /// Create a bare repository and register it as `origin`. Returns its path.
    pub(crate) fn add_bare_remote(&self) -> PathBuf {
        let remote = self.root.path().join("remote.git");
        git_repository::init_bare_repo(&remote);
        git_repository::add_origin_remote(self.work_dir(), &remote.to_string_lossy());
        remote
    }

    /// Commit every file in the archive with plain git.
    pub(crate) fn commit_all(&self, message: &str) {
        git_repository::commit_all(self.work_dir(), message);
    }

    /// Raw URL of a document in the test archive.
    pub(crate) fn raw_url(&self, relative: &str) -> String {
        format!("https://raw.githubusercontent.com/{OWNER}/bntf-union-documents/main/{relative}")
    }
}
