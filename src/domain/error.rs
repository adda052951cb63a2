use std::io;

use thiserror::Error;

/// Library-wide error type for bntf-docs operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value is missing or invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization or parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Category name is not one of the archive folders.
    #[error(
        "Invalid category '{0}': must be one of Protokoller, Vedtekter, Agreements, Policies, Overenskomsten, Other"
    )]
    InvalidCategory(String),

    /// Document file name violates the naming rules.
    #[error("Invalid document name '{name}': {reason}")]
    InvalidDocumentName { name: String, reason: String },

    /// Document does not exist in the archive.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Document already exists and replacement was not requested.
    #[error("Document already exists: {0} (use --replace to overwrite)")]
    DocumentExists(String),

    /// Source file for an add operation is missing.
    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    /// Path escapes the repository root.
    #[error("Path escapes repository root: {0}")]
    PathTraversal(String),

    /// The archive root is not a git repository.
    #[error("Not a git repository: {0}")]
    NotGitRepository(String),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Dispatch API request failed.
    #[error("Dispatch failed{}: {message}", status_suffix(.status))]
    DispatchError { message: String, status: Option<u16> },

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Committed index does not match the tree.
    #[error("Index is stale: {0}. Run 'bntf-docs index' to regenerate it.")]
    IndexStale(String),

    /// A required argument was not given and cannot be prompted for.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// Embedded template failed to render.
    #[error("Template error: {0}")]
    TemplateError(String),

    /// Structural validation reported errors.
    #[error("Validation failed: {errors} error(s), {warnings} warning(s)")]
    ValidationFailed { errors: usize, warnings: usize },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({code})")).unwrap_or_default()
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    pub(crate) fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidDocumentName { name: name.into(), reason: reason.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::Json(_)
            | AppError::InvalidCategory(_)
            | AppError::InvalidDocumentName { .. }
            | AppError::PathTraversal(_)
            | AppError::MissingArgument(_)
            | AppError::TemplateError(_) => io::ErrorKind::InvalidInput,
            AppError::DocumentNotFound(_)
            | AppError::SourceNotFound(_)
            | AppError::NotGitRepository(_)
            | AppError::EnvironmentVariableMissing(_) => io::ErrorKind::NotFound,
            AppError::DocumentExists(_) => io::ErrorKind::AlreadyExists,
            AppError::IndexStale(_) | AppError::ValidationFailed { .. } => {
                io::ErrorKind::InvalidData
            }
            AppError::GitError { .. } | AppError::DispatchError { .. } => io::ErrorKind::Other,
        }
    }
}
