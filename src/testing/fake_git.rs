use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::GitPort;

pub const FAKE_REMOTE: &str = "git@github.com:jarlesteinnes-bot/bntf-union-documents.git";

pub struct FakeGit {
    pub repository: bool,
    pub remote: Option<String>,
    pub branch: Mutex<String>,
    pub changed: Mutex<Vec<String>>,
    pub commits: Mutex<Vec<String>>,
    pub pushes: Mutex<Vec<(String, String)>>,
    pub fail_push: bool,
}

impl FakeGit {
    pub fn new() -> Self {
        Self {
            repository: true,
            remote: Some(FAKE_REMOTE.to_string()),
            branch: Mutex::new("main".to_string()),
            changed: Mutex::new(Vec::new()),
            commits: Mutex::new(Vec::new()),
            pushes: Mutex::new(Vec::new()),
            fail_push: false,
        }
    }

    pub fn not_a_repository() -> Self {
        Self { repository: false, remote: None, ..Self::new() }
    }

    pub fn without_remote() -> Self {
        Self { remote: None, ..Self::new() }
    }

    pub fn set_changed(&self, paths: &[&str]) {
        *self.changed.lock().unwrap() = paths.iter().map(|path| path.to_string()).collect();
    }

    pub fn set_current_branch(&self, branch: &str) {
        *self.branch.lock().unwrap() = branch.to_string();
    }

    pub fn commits(&self) -> Vec<String> {
        self.commits.lock().unwrap().clone()
    }

    pub fn pushes(&self) -> Vec<(String, String)> {
        self.pushes.lock().unwrap().clone()
    }
}

impl GitPort for FakeGit {
    fn is_repository(&self) -> bool {
        self.repository
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>, AppError> {
        if remote != "origin" {
            return Ok(None);
        }
        Ok(self.remote.clone())
    }

    fn current_branch(&self) -> Result<String, AppError> {
        Ok(self.branch.lock().unwrap().clone())
    }

    fn changed_paths(&self) -> Result<Vec<String>, AppError> {
        Ok(self.changed.lock().unwrap().clone())
    }

    fn commit_all(&self, message: &str) -> Result<String, AppError> {
        let mut changed = self.changed.lock().unwrap();
        if changed.is_empty() {
            return Err(AppError::GitError {
                command: "commit".to_string(),
                details: "nothing to commit".to_string(),
            });
        }
        changed.clear();
        self.commits.lock().unwrap().push(message.to_string());
        Ok("abc123".to_string())
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        if self.fail_push {
            return Err(AppError::GitError {
                command: format!("git push {remote} {branch}"),
                details: "rejected".to_string(),
            });
        }
        self.pushes.lock().unwrap().push((remote.to_string(), branch.to_string()));
        Ok(())
    }
}
