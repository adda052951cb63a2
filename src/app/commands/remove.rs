use crate::app::AppContext;
use crate::domain::config::paths;
use crate::domain::{AppError, DocumentKey};
use crate::ports::{DocumentStore, GitPort};

/// Delete a document from its category folder.
pub fn execute<S: DocumentStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    category: &str,
    filename: &str,
) -> Result<DocumentKey, AppError> {
    let key = DocumentKey::parse(category, filename)?;
    let path = paths::document(&key);
    let store = ctx.store();

    if !store.exists(&path) || store.is_dir(&path) {
        return Err(AppError::DocumentNotFound(path));
    }
    store.remove_file(&path)?;
    log::info!("Removed {path}");

    Ok(key)
}
