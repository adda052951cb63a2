//! `repository_dispatch` notification to the app repository.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::app::AppContext;
use crate::app::commands::index;
use crate::app::config::ArchiveSettings;
use crate::domain::{AppError, Category, DispatchPayload, DocumentIndex, UpdateSummary};
use crate::ports::{DispatchClient, DispatchResponse, DocumentStore, GitPort};

/// Builds the dispatch client once settings are known.
pub type Connect<'a> =
    &'a dyn Fn(&ArchiveSettings) -> Result<Box<dyn DispatchClient>, AppError>;

#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyOptions {
    /// Build and print the payload without sending it.
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct NotifyOutcome {
    pub payload: DispatchPayload,
    pub response: Option<DispatchResponse>,
}

pub fn execute<S: DocumentStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    options: NotifyOptions,
    connect: Connect<'_>,
    now: DateTime<Utc>,
) -> Result<NotifyOutcome, AppError> {
    let settings = ctx.settings()?;
    let index = index::build_index(ctx.store(), &settings, now)?;
    let payload = build_payload(&settings, &index, None, now);

    if options.dry_run {
        return Ok(NotifyOutcome { payload, response: None });
    }

    let client = connect(&settings)?;
    let response = client.dispatch(&payload)?;
    log::info!("Dispatched {} (HTTP {})", payload.event_type, response.status);
    Ok(NotifyOutcome { payload, response: Some(response) })
}

/// Payload for the current index. `updated` of `None` announces every category.
pub fn build_payload(
    settings: &ArchiveSettings,
    index: &DocumentIndex,
    updated: Option<&[Category]>,
    now: DateTime<Utc>,
) -> DispatchPayload {
    let updated_categories = match updated {
        Some(categories) => categories.iter().map(|c| c.dir_name().to_string()).collect(),
        None => Category::ALL.iter().map(|c| c.dir_name().to_string()).collect(),
    };

    DispatchPayload {
        event_type: settings.config.notify.event_type.clone(),
        client_payload: UpdateSummary {
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            total_documents: index.statistics.total_documents,
            category_counts: index.statistics.category_counts.clone(),
            updated_categories,
            index_url: settings.index_url().to_string(),
            version: index.version.clone(),
        },
    }
}
