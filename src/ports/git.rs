use crate::domain::AppError;

pub trait GitPort {
    /// Whether the root is inside a git working tree.
    fn is_repository(&self) -> bool;

    /// URL of a configured remote, if present.
    fn remote_url(&self, remote: &str) -> Result<Option<String>, AppError>;

    /// Get the current branch name.
    fn current_branch(&self) -> Result<String, AppError>;

    /// Paths with uncommitted changes (modified, added, deleted, untracked).
    fn changed_paths(&self) -> Result<Vec<String>, AppError>;

    /// Stage every change in the working tree and commit it. Returns the new SHA.
    fn commit_all(&self, message: &str) -> Result<String, AppError>;

    /// Push a branch to the remote.
    fn push_branch(&self, remote: &str, branch: &str) -> Result<(), AppError>;
}
