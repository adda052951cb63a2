//! Filesystem adapter for the `DocumentStore` port.
//!
//! `FilesystemDocumentStore` owns the repository root path and enforces
//! path-traversal safety for every operation.

mod document_store;

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at the archive directory.
#[derive(Debug, Clone)]
pub struct FilesystemDocumentStore {
    root: PathBuf,
}

impl FilesystemDocumentStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

// ── Path safety ────────────────────────────────────────────────────────

impl FilesystemDocumentStore {
    /// Resolve a root-relative path, rejecting anything that leaves the root.
    pub(crate) fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(path);
        if relative.is_absolute() {
            return Err(AppError::PathTraversal(path.to_string()));
        }

        let full_path = self.root.join(relative);
        let normalized_path = normalize_path(&full_path);
        let normalized_root = normalize_path(&self.root);

        if !normalized_path.starts_with(&normalized_root) {
            return Err(AppError::PathTraversal(path.to_string()));
        }

        Ok(full_path)
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(std::path::Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            std::path::Component::Prefix(..) | std::path::Component::RootDir => {
                ret.push(component.as_os_str());
            }
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                ret.pop();
            }
            std::path::Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}
