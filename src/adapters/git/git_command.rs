use std::path::{Path, PathBuf};
use std::process::Command;

use git2::{ErrorCode, IndexAddOption, Repository, StatusOptions};

use crate::domain::AppError;
use crate::ports::GitPort;

#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::discover(&self.root).map_err(git2_error("git2::Repository::discover"))
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<String, AppError> {
        let mut command = Command::new("git");
        command.args(args);
        command.current_dir(cwd.unwrap_or(&self.root));
        log::debug!("Running git {}", args.join(" "));

        let output = command.output().map_err(|e| AppError::GitError {
            command: format!("git {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: format!("git {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn git2_error(command: &'static str) -> impl FnOnce(git2::Error) -> AppError {
    move |e| AppError::GitError { command: command.to_string(), details: e.to_string() }
}

impl GitPort for GitCommandAdapter {
    fn is_repository(&self) -> bool {
        self.repo().map(|repo| !repo.is_bare()).unwrap_or(false)
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>, AppError> {
        let repo = self.repo()?;
        match repo.find_remote(remote) {
            Ok(found) => Ok(found.url().map(str::to_string)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) if e.class() == git2::ErrorClass::Config => Ok(None),
            Err(e) => Err(git2_error("git2::Repository::find_remote")(e)),
        }
    }

    fn current_branch(&self) -> Result<String, AppError> {
        let repo = self.repo()?;

        match repo.head() {
            Ok(head) => {
                let shorthand = head.shorthand().ok_or_else(|| AppError::GitError {
                    command: "git2::Reference::shorthand".to_string(),
                    details: "HEAD has no shorthand".to_string(),
                })?;
                Ok(shorthand.to_string())
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head_ref = repo
                    .find_reference("HEAD")
                    .map_err(git2_error("git2::Repository::find_reference(HEAD)"))?;

                if let Some(target) = head_ref.symbolic_target() {
                    Ok(target.strip_prefix("refs/heads/").unwrap_or(target).to_string())
                } else {
                    Err(AppError::GitError {
                        command: "current_branch".to_string(),
                        details: "HEAD is detached and unborn".to_string(),
                    })
                }
            }
            Err(e) => Err(git2_error("git2::Repository::head")(e)),
        }
    }

    fn changed_paths(&self) -> Result<Vec<String>, AppError> {
        let repo = self.repo()?;
        let mut options = StatusOptions::new();
        options.include_untracked(true).recurse_untracked_dirs(true).include_ignored(false);

        let statuses =
            repo.statuses(Some(&mut options)).map_err(git2_error("git2::Repository::statuses"))?;

        let mut paths: Vec<String> = statuses
            .iter()
            .filter(|entry| !entry.status().is_ignored())
            .filter_map(|entry| entry.path().map(str::to_string))
            .collect();
        paths.sort();
        paths.dedup();
        Ok(paths)
    }

    fn commit_all(&self, message: &str) -> Result<String, AppError> {
        let repo = self.repo()?;
        let mut index = repo.index().map_err(git2_error("git2::Repository::index"))?;

        index
            .add_all(["*"], IndexAddOption::DEFAULT, None)
            .map_err(git2_error("git2::Index::add_all"))?;
        // add_all does not stage deletions.
        index.update_all(["*"], None).map_err(git2_error("git2::Index::update_all"))?;
        index.write().map_err(git2_error("git2::Index::write"))?;

        let tree_id = index.write_tree().map_err(git2_error("git2::Index::write_tree"))?;
        let tree = repo.find_tree(tree_id).map_err(git2_error("git2::Repository::find_tree"))?;
        let signature = repo.signature().map_err(git2_error("git2::Repository::signature"))?;

        let parents = match repo.head() {
            Ok(head) => {
                vec![head.peel_to_commit().map_err(git2_error("git2::Reference::peel_to_commit"))?]
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => vec![],
            Err(e) => return Err(git2_error("git2::Repository::head")(e)),
        };
        let parents_refs: Vec<&git2::Commit> = parents.iter().collect();

        let oid = repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents_refs)
            .map_err(git2_error("git2::Repository::commit"))?;

        log::info!("Created commit {}", oid);
        Ok(oid.to_string())
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        self.run(&["push", remote, branch], None)?;
        Ok(())
    }
}
