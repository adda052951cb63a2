use std::collections::BTreeMap;

use crate::domain::config::paths;
use crate::domain::{AppError, Category, Diagnostics, DocumentName, PDF_EXTENSION};
use crate::ports::DocumentStore;

/// Top-level folders that look like a category but differ in case.
pub fn root_checks<S: DocumentStore + ?Sized>(
    store: &S,
    diagnostics: &mut Diagnostics,
) -> Result<(), AppError> {
    for entry in store.list_dir("")? {
        if entry.starts_with('.') || !store.is_dir(&entry) {
            continue;
        }
        if Category::from_dir_name(&entry).is_some() {
            continue;
        }
        if let Some(category) = Category::from_dir_name_ignore_case(&entry) {
            diagnostics.push_error(
                format!("{entry}/"),
                format!(
                    "Folder name must be exactly '{}'; the app requests it case-sensitively",
                    category.dir_name()
                ),
            );
        }
    }
    Ok(())
}

/// Per-folder checks: presence, flatness, extensions, names, sizes, collisions.
pub fn category_checks<S: DocumentStore + ?Sized>(
    store: &S,
    diagnostics: &mut Diagnostics,
) -> Result<(), AppError> {
    for category in Category::ALL {
        let dir = paths::category_dir(category);
        if !store.is_dir(dir) {
            diagnostics.push_warning(format!("{dir}/"), "Category folder is missing");
            continue;
        }

        for name in store.undecodable_entries(dir)? {
            diagnostics.push_error(
                format!("{dir}/{name}"),
                "File name is not valid UTF-8; rename it so the app can request it",
            );
        }

        let mut folded: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in store.list_dir(dir)? {
            if entry.starts_with('.') {
                continue;
            }
            let path = format!("{dir}/{entry}");

            if store.is_dir(&path) {
                diagnostics
                    .push_error(format!("{path}/"), "Category folders must be flat; remove the subfolder");
                continue;
            }

            folded.entry(entry.to_lowercase()).or_default().push(entry.clone());
            check_file(store, &path, &entry, diagnostics)?;
        }

        for names in folded.values().filter(|names| names.len() > 1) {
            diagnostics.push_warning(
                format!("{dir}/{}", names[0]),
                format!(
                    "Names collide on case-insensitive filesystems: {}",
                    names.join(", ")
                ),
            );
        }
    }
    Ok(())
}

fn check_file<S: DocumentStore + ?Sized>(
    store: &S,
    path: &str,
    entry: &str,
    diagnostics: &mut Diagnostics,
) -> Result<(), AppError> {
    if !entry.ends_with(PDF_EXTENSION) {
        let message = if entry.to_lowercase().ends_with(PDF_EXTENSION) {
            format!("Extension must be lowercase '{PDF_EXTENSION}'")
        } else {
            format!("Not a PDF: files in category folders must use the '{PDF_EXTENSION}' extension")
        };
        diagnostics.push_error(path, message);
        return Ok(());
    }

    if let Err(AppError::InvalidDocumentName { reason, .. }) = DocumentName::new(entry) {
        diagnostics.push_error(path, format!("Invalid document name: {reason}"));
        return Ok(());
    }

    if store.metadata(path)?.size == 0 {
        diagnostics.push_warning(path, "Document is empty (0 bytes)");
    }
    Ok(())
}
