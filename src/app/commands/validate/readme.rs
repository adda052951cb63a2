use crate::app::config::ArchiveSettings;
use crate::domain::config::paths::README_FILE;
use crate::domain::{AppError, Diagnostics};
use crate::ports::DocumentStore;

/// README presence, the documented URL template, and every concrete raw URL.
///
/// Without resolved settings only presence is checked.
pub fn readme_checks<S: DocumentStore + ?Sized>(
    store: &S,
    settings: Option<&ArchiveSettings>,
    diagnostics: &mut Diagnostics,
) -> Result<(), AppError> {
    if !store.exists(README_FILE) {
        diagnostics.push_error(README_FILE, "README is missing");
        return Ok(());
    }
    let Some(settings) = settings else {
        return Ok(());
    };

    let content = store.read_text(README_FILE)?;
    let template = settings.raw.template();
    if !content.contains(&template) {
        diagnostics.push_warning(
            README_FILE,
            format!("Does not document the raw URL template {template}"),
        );
    }

    for url in extract_urls(&content) {
        let Some(path) = settings.raw.locate(url) else {
            continue;
        };
        if store.exists(&path) && !store.is_dir(&path) {
            continue;
        }

        // Root files such as the index may be generated later; folder paths must exist now.
        if path.contains('/') {
            diagnostics.push_error(README_FILE, format!("Links to missing file {path}: {url}"));
        } else {
            diagnostics.push_warning(README_FILE, format!("Links to {path}, which does not exist yet"));
        }
    }
    Ok(())
}

/// `http(s)://` URLs in free text, stopping at whitespace and markdown delimiters.
fn extract_urls(content: &str) -> Vec<&str> {
    let mut urls = Vec::new();
    let mut rest = content;
    while let Some(start) = rest.find("http") {
        let candidate = &rest[start..];
        if !(candidate.starts_with("https://") || candidate.starts_with("http://")) {
            rest = &candidate[4..];
            continue;
        }
        let end = candidate
            .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '`' | '"' | '\'' | ')' | ']'))
            .unwrap_or(candidate.len());
        let url = candidate[..end].trim_end_matches(['.', ',', ';', ':']);
        if !url.is_empty() {
            urls.push(url);
        }
        rest = &candidate[end..];
    }
    urls
}
