//! Repository filesystem operations for the archive tree.

use chrono::{DateTime, Utc};

use crate::domain::AppError;

/// What the store knows about a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    pub is_dir: bool,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

/// Port for the archive's working tree.
///
/// All `path` arguments are relative to the repository root, with `""` naming
/// the root itself. Implementations must reject paths that escape the root.
pub trait DocumentStore {
    /// Names of the entries directly inside a directory, sorted.
    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError>;

    /// Entries of a directory whose names are not valid UTF-8, lossily decoded
    /// and sorted. `list_dir` leaves these out.
    fn undecodable_entries(&self, path: &str) -> Result<Vec<String>, AppError>;

    fn metadata(&self, path: &str) -> Result<EntryMetadata, AppError>;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &str) -> bool;

    fn is_dir(&self, path: &str) -> bool;

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AppError>;

    /// Write content to a file, creating parent directories as needed.
    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError>;

    /// Read a file as UTF-8 text.
    fn read_text(&self, path: &str) -> Result<String, AppError> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes).map_err(|e| {
            AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    fn write_text(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.write_bytes(path, content.as_bytes())
    }

    /// Remove a file. Fails if it does not exist.
    fn remove_file(&self, path: &str) -> Result<(), AppError>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;
}
