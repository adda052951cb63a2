pub mod category;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod index;
pub mod notification;
pub mod raw_url;
pub mod webhook;

pub use category::Category;
pub use config::{
    ArchiveConfig, DEFAULT_REPOSITORY_NAME, IndexConfig, NotifyConfig, RepositoryConfig,
    SyncConfig, WebhookSettings,
};
pub use config::parse::{parse_config_content, parse_github_url, split_owner_repo};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use document::{Document, DocumentId, DocumentKey, DocumentName, PDF_EXTENSION, hash_bytes};
pub use error::AppError;
pub use index::{DEFAULT_INDEX_FILE, DEFAULT_INDEX_VERSION, DocumentIndex, IndexEntry};
pub use notification::{DispatchPayload, UpdateSummary};
pub use raw_url::{DEFAULT_RAW_HOST, RawUrlBase};
pub use webhook::WebhookConfig;
