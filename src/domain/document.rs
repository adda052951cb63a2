//! Documents: a (category, filename) identity plus what was observed on disk.

use std::fmt;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use super::{AppError, Category};

pub const PDF_EXTENSION: &str = ".pdf";

/// Number of hex characters kept from the id digest.
const ID_LEN: usize = 12;

/// A validated PDF file name, e.g. `Vedtekter 2024.pdf`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentName(String);

impl DocumentName {
    pub fn new(name: &str) -> Result<Self, AppError> {
        if name.is_empty() {
            return Err(AppError::invalid_name(name, "name is empty"));
        }
        if name == "." || name == ".." || name.contains('/') || name.contains('\\') {
            return Err(AppError::invalid_name(name, "must be a plain file name"));
        }
        if name.starts_with('.') {
            return Err(AppError::invalid_name(name, "must not start with '.'"));
        }
        if name.chars().any(char::is_control) {
            return Err(AppError::invalid_name(name, "contains control characters"));
        }
        let Some(stem) = name.strip_suffix(PDF_EXTENSION) else {
            return Err(AppError::invalid_name(name, "must use the .pdf extension"));
        };
        if stem.trim().is_empty() {
            return Err(AppError::invalid_name(name, "name has no stem"));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name without the `.pdf` extension.
    pub fn stem(&self) -> &str {
        &self.0[..self.0.len() - PDF_EXTENSION.len()]
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a document in the archive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentKey {
    pub category: Category,
    pub name: DocumentName,
}

impl DocumentKey {
    pub fn new(category: Category, name: DocumentName) -> Self {
        Self { category, name }
    }

    /// Parse a category folder and file name.
    pub fn parse(category: &str, name: &str) -> Result<Self, AppError> {
        Ok(Self::new(Category::parse(category)?, DocumentName::new(name)?))
    }

    /// `<category>/<filename>`, relative to the archive root.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.category.dir_name(), self.name)
    }

    pub fn id(&self) -> DocumentId {
        DocumentId::for_key(self)
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative_path())
    }
}

/// Stable short identifier published in the index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn for_key(key: &DocumentKey) -> Self {
        let seed = format!("{}_{}", key.category.dir_name(), key.name);
        let mut digest = hash_bytes(seed.as_bytes());
        digest.truncate(ID_LEN);
        Self(digest)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A document observed in the working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub key: DocumentKey,
    pub size: u64,
    pub modified: DateTime<Utc>,
    /// Lowercase hex SHA-256 of the file content.
    pub sha256: String,
}

/// Lowercase hex SHA-256 digest.
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
