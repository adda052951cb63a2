//! Regenerate the index, commit, push, and notify the app.

use chrono::{DateTime, Utc};

use crate::app::AppContext;
use crate::app::commands::index;
use crate::app::commands::notify::{self, Connect};
use crate::app::commands::validate::{self, ValidateOptions};
use crate::domain::{AppError, Category};
use crate::ports::{DocumentStore, GitPort};

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub push: bool,
    pub notify: bool,
    /// Commit message prefix; defaults to `sync.commit_message`.
    pub message: Option<String>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self { push: true, notify: true, message: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationStatus {
    Sent { status: u16, updated_categories: Vec<String> },
    Skipped(String),
    /// Dispatch failed after the push went through.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncCommit {
    pub sha: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub index_written: bool,
    pub changed_paths: Vec<String>,
    pub commit: Option<SyncCommit>,
    /// `<remote> <branch>` when pushed.
    pub pushed: Option<(String, String)>,
    pub notification: NotificationStatus,
}

pub fn execute<S: DocumentStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    options: SyncOptions,
    connect: Connect<'_>,
    now: DateTime<Utc>,
) -> Result<SyncOutcome, AppError> {
    let git = ctx.git();
    if !git.is_repository() {
        return Err(AppError::NotGitRepository(ctx.root().display().to_string()));
    }

    let checks = validate::execute(ctx, ValidateOptions::default())?;
    if checks.errors > 0 {
        checks.diagnostics.emit();
        return Err(AppError::ValidationFailed { errors: checks.errors, warnings: checks.warnings });
    }

    let settings = ctx.settings()?;
    let store = ctx.store();
    let built = index::build_index(store, &settings, now)?;
    let index_written = index::write_index(store, &settings, &built)?;

    let changed_paths = git.changed_paths()?;
    if changed_paths.is_empty() {
        return Ok(SyncOutcome {
            index_written,
            changed_paths,
            commit: None,
            pushed: None,
            notification: NotificationStatus::Skipped("nothing to sync".to_string()),
        });
    }

    let prefix = options.message.as_deref().unwrap_or(&settings.config.sync.commit_message);
    let message = commit_message(prefix, built.statistics.total_documents, now);
    let sha = git.commit_all(&message)?;
    log::info!("Committed {} change(s) as {sha}", changed_paths.len());
    let commit = Some(SyncCommit { sha, message });

    if !options.push {
        return Ok(SyncOutcome {
            index_written,
            changed_paths,
            commit,
            pushed: None,
            notification: NotificationStatus::Skipped("changes were not pushed".to_string()),
        });
    }

    let remote = settings.config.sync.remote.clone();
    let branch = git.current_branch()?;
    if branch != settings.branch() {
        log::warn!("Pushing '{branch}', but the app reads from '{}'", settings.branch());
    }
    git.push_branch(&remote, &branch)?;
    let pushed = Some((remote, branch));

    let notification = if !options.notify {
        NotificationStatus::Skipped("disabled with --no-notify".to_string())
    } else {
        // Root-only changes (README, index) do not name a category; announce all.
        let updated = updated_categories(&changed_paths);
        let updated = (!updated.is_empty()).then_some(updated.as_slice());
        let payload = notify::build_payload(&settings, &built, updated, now);
        match connect(&settings).and_then(|client| client.dispatch(&payload)) {
            Ok(response) => NotificationStatus::Sent {
                status: response.status,
                updated_categories: payload.client_payload.updated_categories,
            },
            Err(AppError::EnvironmentVariableMissing(name)) => {
                NotificationStatus::Skipped(format!("environment variable '{name}' is not set"))
            }
            Err(e) => {
                log::warn!("Notification failed after push: {e}");
                NotificationStatus::Failed(e.to_string())
            }
        }
    };

    Ok(SyncOutcome { index_written, changed_paths, commit, pushed, notification })
}

/// `<prefix>: <N> documents - <YYYY-MM-DD HH:MM UTC>`
pub fn commit_message(prefix: &str, documents: usize, now: DateTime<Utc>) -> String {
    format!("{prefix}: {documents} documents - {}", now.format("%Y-%m-%d %H:%M UTC"))
}

/// Categories touched by a set of changed paths, in category order.
pub fn updated_categories(changed_paths: &[String]) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|category| {
            changed_paths.iter().any(|path| {
                path.split_once('/').is_some_and(|(folder, _)| folder == category.dir_name())
            })
        })
        .collect()
}
