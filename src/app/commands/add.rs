//! Copy a PDF into a category folder.

use url::Url;

use crate::app::AppContext;
use crate::domain::config::paths;
use crate::domain::{AppError, Category, DocumentKey, DocumentName};
use crate::ports::{DocumentStore, GitPort};

#[derive(Debug, Clone)]
pub struct AddOptions {
    pub category: Category,
    /// File name in the archive.
    pub name: String,
    pub content: Vec<u8>,
    /// Overwrite an existing document with the same key.
    pub replace: bool,
}

#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub key: DocumentKey,
    pub url: Url,
    pub size: u64,
    pub replaced: bool,
}

pub fn execute<S: DocumentStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    options: AddOptions,
) -> Result<AddOutcome, AppError> {
    let key = DocumentKey::new(options.category, DocumentName::new(&options.name)?);
    let settings = ctx.settings()?;
    let store = ctx.store();
    let path = paths::document(&key);

    let replaced = store.exists(&path);
    if replaced && !options.replace {
        return Err(AppError::DocumentExists(path));
    }
    if store.is_dir(&path) {
        return Err(AppError::DocumentExists(format!("{path} (a folder)")));
    }

    if !store.is_dir(paths::category_dir(key.category)) {
        log::info!("Creating category folder {}/", key.category);
    }
    store.write_bytes(&path, &options.content)?;
    log::info!("Wrote {path} ({} bytes)", options.content.len());

    Ok(AddOutcome {
        url: settings.raw.document_url(&key),
        size: options.content.len() as u64,
        key,
        replaced,
    })
}
