//! `pdf-index.json` generation and freshness checks.

use chrono::{DateTime, Utc};

use crate::app::AppContext;
use crate::app::commands::catalog;
use crate::app::config::ArchiveSettings;
use crate::domain::{AppError, DocumentIndex};
use crate::ports::{DocumentStore, GitPort};

#[derive(Debug, Clone, Copy, Default)]
pub struct IndexOptions {
    /// Compare against the committed index instead of writing.
    pub check: bool,
    /// Print the index instead of writing it.
    pub stdout: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    Written,
    /// The committed index already described the tree; the file was left alone.
    Unchanged,
    /// `--check` passed.
    Fresh,
    Printed,
}

#[derive(Debug, Clone)]
pub struct IndexOutcome {
    pub index: DocumentIndex,
    pub json: String,
    pub path: String,
    pub status: IndexStatus,
}

pub fn execute<S: DocumentStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    options: IndexOptions,
    generated_at: DateTime<Utc>,
) -> Result<IndexOutcome, AppError> {
    let settings = ctx.settings()?;
    let store = ctx.store();
    let index = build_index(store, &settings, generated_at)?;
    let json = index.to_json()?;
    let path = settings.index_file().to_string();

    let status = if options.check {
        check_fresh(store, &settings, &index)?;
        IndexStatus::Fresh
    } else if options.stdout {
        IndexStatus::Printed
    } else if write_index(store, &settings, &index)? {
        IndexStatus::Written
    } else {
        IndexStatus::Unchanged
    };

    Ok(IndexOutcome { index, json, path, status })
}

/// Build the index for the current tree.
///
/// Entries whose content matches the committed index keep its `modified`.
pub fn build_index<S: DocumentStore + ?Sized>(
    store: &S,
    settings: &ArchiveSettings,
    generated_at: DateTime<Utc>,
) -> Result<DocumentIndex, AppError> {
    let documents = catalog::scan_documents(store)?;
    let mut index =
        DocumentIndex::build(&documents, &settings.raw, &settings.config.index.version, generated_at);
    match read_committed(store, settings) {
        Ok(Some(committed)) => index.carry_forward_modified(&committed),
        Ok(None) => {}
        Err(e) => log::debug!("Ignoring committed {}: {e}", settings.index_file()),
    }
    Ok(index)
}

/// The committed index, or `None` when the file is missing.
pub fn read_committed<S: DocumentStore + ?Sized>(
    store: &S,
    settings: &ArchiveSettings,
) -> Result<Option<DocumentIndex>, AppError> {
    let file = settings.index_file();
    if !store.exists(file) {
        return Ok(None);
    }
    let content = store.read_text(file)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Fail with `IndexStale` unless the committed index matches `index`.
pub fn check_fresh<S: DocumentStore + ?Sized>(
    store: &S,
    settings: &ArchiveSettings,
    index: &DocumentIndex,
) -> Result<(), AppError> {
    let file = settings.index_file();
    match read_committed(store, settings) {
        Ok(Some(committed)) if committed.is_equivalent(index) => Ok(()),
        Ok(Some(_)) => {
            Err(AppError::IndexStale(format!("{file} does not match the documents in the tree")))
        }
        Ok(None) => Err(AppError::IndexStale(format!("{file} is missing"))),
        Err(AppError::Json(e)) => {
            Err(AppError::IndexStale(format!("{file} could not be parsed ({e})")))
        }
        Err(e) => Err(e),
    }
}

/// Write the index unless the committed one is equivalent. Returns whether it wrote.
pub fn write_index<S: DocumentStore + ?Sized>(
    store: &S,
    settings: &ArchiveSettings,
    index: &DocumentIndex,
) -> Result<bool, AppError> {
    let file = settings.index_file();
    if let Ok(Some(committed)) = read_committed(store, settings)
        && committed.is_equivalent(index)
    {
        log::info!("{file} is up to date");
        return Ok(false);
    }

    store.write_text(file, &index.to_json()?)?;
    log::info!(
        "Wrote {file} with {} document(s)",
        index.statistics.total_documents
    );
    Ok(true)
}
