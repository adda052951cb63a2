//! Observation of the category folders as documents.

use crate::domain::config::paths;
use crate::domain::{AppError, Category, Document, DocumentKey, DocumentName, hash_bytes};
use crate::ports::DocumentStore;

/// Every valid document in the tree, in category order then by filename.
///
/// Dotfiles, subdirectories and files that are not valid document names are
/// skipped here; `validate` reports them.
pub fn scan_documents<S: DocumentStore + ?Sized>(store: &S) -> Result<Vec<Document>, AppError> {
    let mut documents = Vec::new();
    for category in Category::ALL {
        documents.extend(scan_category(store, category)?);
    }
    Ok(documents)
}

pub fn scan_category<S: DocumentStore + ?Sized>(
    store: &S,
    category: Category,
) -> Result<Vec<Document>, AppError> {
    let dir = paths::category_dir(category);
    if !store.is_dir(dir) {
        log::debug!("Category folder {dir}/ is missing");
        return Ok(Vec::new());
    }

    let mut documents = Vec::new();
    for entry in store.list_dir(dir)? {
        if entry.starts_with('.') {
            continue;
        }
        let Ok(name) = DocumentName::new(&entry) else {
            log::debug!("Skipping {dir}/{entry}: not a document name");
            continue;
        };
        let key = DocumentKey::new(category, name);
        if store.is_dir(&paths::document(&key)) {
            log::debug!("Skipping {key}: is a directory");
            continue;
        }
        documents.push(observe(store, key)?);
    }
    Ok(documents)
}

/// Read size, mtime and digest of one document.
pub fn observe<S: DocumentStore + ?Sized>(
    store: &S,
    key: DocumentKey,
) -> Result<Document, AppError> {
    let path = paths::document(&key);
    let metadata = store.metadata(&path)?;
    let content = store.read_bytes(&path)?;
    Ok(Document { key, size: metadata.size, modified: metadata.modified, sha256: hash_bytes(&content) })
}
