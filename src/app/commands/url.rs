use url::Url;

use crate::app::AppContext;
use crate::domain::config::paths;
use crate::domain::{AppError, DocumentKey};
use crate::ports::{DocumentStore, GitPort};

#[derive(Debug, Clone)]
pub struct UrlOptions {
    pub category: String,
    pub filename: String,
    /// Require the document to exist in the working tree.
    pub check: bool,
}

/// Raw URL the app fetches for a document.
pub fn execute<S: DocumentStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    options: UrlOptions,
) -> Result<Url, AppError> {
    let key = DocumentKey::parse(&options.category, &options.filename)?;
    if options.check && !ctx.store().exists(&paths::document(&key)) {
        return Err(AppError::DocumentNotFound(key.relative_path()));
    }
    let settings = ctx.settings()?;
    Ok(settings.raw.document_url(&key))
}
