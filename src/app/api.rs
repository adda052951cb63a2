//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against a real archive directory.

use std::path::{Path, PathBuf};

use chrono::Utc;
use url::Url;

use crate::adapters::dispatch::{HttpDispatchClient, RetryPolicy, RetryingDispatchClient};
use crate::adapters::filesystem::FilesystemDocumentStore;
use crate::adapters::git::GitCommandAdapter;
use crate::app::AppContext;
use crate::app::commands::{
    add, index, init, list, notify, remove, sync, url as url_command, validate, webhook,
};
use crate::app::config::ArchiveSettings;
use crate::ports::DispatchClient;

pub use crate::app::commands::add::AddOutcome;
pub use crate::app::commands::index::{IndexOptions, IndexOutcome, IndexStatus};
pub use crate::app::commands::init::{InitOptions, InitOutcome};
pub use crate::app::commands::list::{ListOptions, ListedDocument};
pub use crate::app::commands::notify::{NotifyOptions, NotifyOutcome};
pub use crate::app::commands::sync::{NotificationStatus, SyncCommit, SyncOptions, SyncOutcome};
pub use crate::app::commands::url::UrlOptions;
pub use crate::app::commands::validate::{ValidateOptions, ValidateOutcome};
pub use crate::app::commands::webhook::WebhookOutcome;
pub use crate::domain::{AppError, Category, DocumentKey};

/// Create an `AppContext` for a given path.
fn create_context(path: PathBuf) -> AppContext<FilesystemDocumentStore, GitCommandAdapter> {
    let store = FilesystemDocumentStore::new(path.clone());
    let git = GitCommandAdapter::new(path.clone());
    AppContext::new(path, store, git)
}

/// Build the retrying HTTP dispatch client from the configured token variable.
fn connect_dispatch(settings: &ArchiveSettings) -> Result<Box<dyn DispatchClient>, AppError> {
    let notify = &settings.config.notify;
    let http = HttpDispatchClient::from_env(settings.dispatch_url()?, notify)?;
    Ok(Box::new(RetryingDispatchClient::new(Box::new(http), RetryPolicy::from_config(notify))))
}

// =============================================================================
// Archive layout
// =============================================================================

/// Scaffold category folders, README, config and index at the specified path.
pub fn init_at(path: impl Into<PathBuf>, options: InitOptions) -> Result<InitOutcome, AppError> {
    init::execute(&create_context(path.into()), options, Utc::now())
}

/// Run the structural checks at the specified path.
pub fn validate_at(
    path: impl Into<PathBuf>,
    options: ValidateOptions,
) -> Result<ValidateOutcome, AppError> {
    validate::execute(&create_context(path.into()), options)
}

/// Generate, check, or print the index at the specified path.
pub fn index_at(path: impl Into<PathBuf>, options: IndexOptions) -> Result<IndexOutcome, AppError> {
    index::execute(&create_context(path.into()), options, Utc::now())
}

// =============================================================================
// Documents
// =============================================================================

pub fn list_at(
    path: impl Into<PathBuf>,
    options: ListOptions,
) -> Result<Vec<ListedDocument>, AppError> {
    list::execute(&create_context(path.into()), options)
}

pub fn url_at(path: impl Into<PathBuf>, options: UrlOptions) -> Result<Url, AppError> {
    url_command::execute(&create_context(path.into()), options)
}

/// Copy `source` into `category`, named after the source file unless `name` is given.
pub fn add_at(
    path: impl Into<PathBuf>,
    source: &Path,
    category: Category,
    name: Option<&str>,
    replace: bool,
) -> Result<AddOutcome, AppError> {
    if !source.is_file() {
        return Err(AppError::SourceNotFound(source.display().to_string()));
    }
    let name = match name {
        Some(name) => name.to_string(),
        None => source
            .file_name()
            .and_then(|file_name| file_name.to_str())
            .map(str::to_string)
            .ok_or_else(|| AppError::invalid_name(source.display().to_string(), "not valid UTF-8"))?,
    };
    let content = std::fs::read(source)?;

    let options = add::AddOptions { category, name, content, replace };
    add::execute(&create_context(path.into()), options)
}

pub fn remove_at(
    path: impl Into<PathBuf>,
    category: &str,
    filename: &str,
) -> Result<DocumentKey, AppError> {
    remove::execute(&create_context(path.into()), category, filename)
}

// =============================================================================
// Publishing
// =============================================================================

/// Send (or with `dry_run`, only build) the update notification.
pub fn notify_at(
    path: impl Into<PathBuf>,
    options: NotifyOptions,
) -> Result<NotifyOutcome, AppError> {
    notify::execute(&create_context(path.into()), options, &connect_dispatch, Utc::now())
}

pub fn webhook_at(path: impl Into<PathBuf>) -> Result<WebhookOutcome, AppError> {
    webhook::execute(&create_context(path.into()))
}

/// Regenerate the index, commit, push, and notify.
pub fn sync_at(path: impl Into<PathBuf>, options: SyncOptions) -> Result<SyncOutcome, AppError> {
    sync::execute(&create_context(path.into()), options, &connect_dispatch, Utc::now())
}
