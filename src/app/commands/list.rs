use url::Url;

use crate::app::AppContext;
use crate::app::commands::catalog;
use crate::domain::{AppError, Category, Document};
use crate::ports::{DocumentStore, GitPort};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub category: Option<Category>,
}

#[derive(Debug, Clone)]
pub struct ListedDocument {
    pub document: Document,
    pub url: Url,
}

pub fn execute<S: DocumentStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    options: ListOptions,
) -> Result<Vec<ListedDocument>, AppError> {
    let settings = ctx.settings()?;
    let documents = match options.category {
        Some(category) => catalog::scan_category(ctx.store(), category)?,
        None => catalog::scan_documents(ctx.store())?,
    };

    Ok(documents
        .into_iter()
        .map(|document| {
            let url = settings.raw.document_url(&document.key);
            ListedDocument { document, url }
        })
        .collect())
}
