//! Tool configuration loaded from `bntf-docs.toml`.

pub mod parse;
pub mod paths;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, DEFAULT_INDEX_FILE, DEFAULT_INDEX_VERSION, DEFAULT_RAW_HOST};

pub const DEFAULT_REPOSITORY_NAME: &str = "bntf-union-documents";

/// Configuration for the archive, every key optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchiveConfig {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub webhook: WebhookSettings,
}

impl ArchiveConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.repository.validate()?;
        self.index.validate()?;
        self.notify.validate()?;
        self.sync.validate()?;
        self.webhook.validate()?;
        Ok(())
    }
}

/// Where the archive is hosted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// GitHub owner. Inferred from the origin remote when absent.
    #[serde(default)]
    pub owner: Option<String>,
    /// Repository name. Inferred from the origin remote when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Branch the app reads from.
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Raw-content host.
    #[serde(default = "default_raw_host")]
    pub raw_host: Url,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self { owner: None, name: None, branch: default_branch(), raw_host: default_raw_host() }
    }
}

impl RepositoryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.owner.as_deref().is_some_and(|owner| owner.trim().is_empty()) {
            return Err(AppError::config_error("repository.owner must not be empty"));
        }
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(AppError::config_error("repository.name must not be empty"));
        }
        if self.branch.trim().is_empty() {
            return Err(AppError::config_error("repository.branch must not be empty"));
        }
        if !matches!(self.raw_host.scheme(), "http" | "https") {
            return Err(AppError::config_error("repository.raw_host must be an http(s) URL"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Index file name at the repository root.
    #[serde(default = "default_index_file")]
    pub file: String,
    /// Index schema version published to the app.
    #[serde(default = "default_index_version")]
    pub version: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { file: default_index_file(), version: default_index_version() }
    }
}

impl IndexConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_root_file("index.file", &self.file)?;
        if self.version.trim().is_empty() {
            return Err(AppError::config_error("index.version must not be empty"));
        }
        Ok(())
    }
}

/// App notification through GitHub's `repository_dispatch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifyConfig {
    /// GitHub API root.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Repository (under the archive owner) that receives the dispatch event.
    #[serde(default = "default_app_repository")]
    pub app_repository: String,
    #[serde(default = "default_event_type")]
    pub event_type: String,
    /// Environment variable holding the API token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum attempts per dispatch.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between attempts in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            app_repository: default_app_repository(),
            event_type: default_event_type(),
            token_env: default_token_env(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl NotifyConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.app_repository.trim().is_empty() || self.app_repository.contains('/') {
            return Err(AppError::config_error(
                "notify.app_repository must be a repository name without owner",
            ));
        }
        if self.event_type.trim().is_empty() {
            return Err(AppError::config_error("notify.event_type must not be empty"));
        }
        if self.token_env.trim().is_empty() {
            return Err(AppError::config_error("notify.token_env must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("notify.timeout_secs must be greater than 0"));
        }
        if self.max_retries == 0 {
            return Err(AppError::config_error("notify.max_retries must be greater than 0"));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::config_error("notify.retry_delay_ms must be greater than 0"));
        }
        Ok(())
    }

    /// `<api_url>/repos/<owner>/<app_repository>/dispatches`.
    pub fn dispatch_url(&self, owner: &str) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::config_error("notify.api_url cannot be a base URL"))?
            .pop_if_empty()
            .extend(["repos", owner, self.app_repository.as_str(), "dispatches"]);
        Ok(url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Remote to push to.
    #[serde(default = "default_remote")]
    pub remote: String,
    /// Commit message prefix.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { remote: default_remote(), commit_message: default_commit_message() }
    }
}

impl SyncConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.remote.trim().is_empty() {
            return Err(AppError::config_error("sync.remote must not be empty"));
        }
        if self.commit_message.trim().is_empty() {
            return Err(AppError::config_error("sync.commit_message must not be empty"));
        }
        Ok(())
    }
}

/// Settings for the generated webhook configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSettings {
    #[serde(default = "default_webhook_file")]
    pub file: String,
    #[serde(default = "default_webhook_url")]
    pub url: Url,
    #[serde(default = "default_webhook_events")]
    pub events: Vec<String>,
    /// Environment variable holding the webhook secret.
    #[serde(default = "default_secret_env")]
    pub secret_env: String,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            file: default_webhook_file(),
            url: default_webhook_url(),
            events: default_webhook_events(),
            secret_env: default_secret_env(),
        }
    }
}

impl WebhookSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_root_file("webhook.file", &self.file)?;
        if self.events.is_empty() {
            return Err(AppError::config_error("webhook.events must list at least one event"));
        }
        if self.events.iter().any(|event| event.trim().is_empty()) {
            return Err(AppError::config_error("webhook.events must not contain empty names"));
        }
        if self.secret_env.trim().is_empty() {
            return Err(AppError::config_error("webhook.secret_env must not be empty"));
        }
        Ok(())
    }
}

fn validate_root_file(key: &str, file: &str) -> Result<(), AppError> {
    if file.trim().is_empty() {
        return Err(AppError::config_error(format!("{key} must not be empty")));
    }
    if file.contains('/') || file.contains('\\') || file == "." || file == ".." {
        return Err(AppError::config_error(format!(
            "{key} must be a file name at the repository root"
        )));
    }
    Ok(())
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_raw_host() -> Url {
    Url::parse(DEFAULT_RAW_HOST).expect("Default raw host must be valid")
}

fn default_index_file() -> String {
    DEFAULT_INDEX_FILE.to_string()
}

fn default_index_version() -> String {
    DEFAULT_INDEX_VERSION.to_string()
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com").expect("Default API URL must be valid")
}

fn default_app_repository() -> String {
    "bntf-ios-app".to_string()
}

fn default_event_type() -> String {
    "document_update".to_string()
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_commit_message() -> String {
    "Update documents".to_string()
}

fn default_webhook_file() -> String {
    "webhook-config.json".to_string()
}

fn default_webhook_url() -> Url {
    Url::parse("https://api.bntf.no/webhook/document-update")
        .expect("Default webhook URL must be valid")
}

fn default_webhook_events() -> Vec<String> {
    vec!["push".to_string(), "release".to_string()]
}

fn default_secret_env() -> String {
    "BNTF_WEBHOOK_SECRET".to_string()
}
