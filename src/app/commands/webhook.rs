use crate::app::AppContext;
use crate::app::config;
use crate::domain::{AppError, WebhookConfig};
use crate::ports::{DocumentStore, GitPort};

#[derive(Debug, Clone)]
pub struct WebhookOutcome {
    pub path: String,
    pub config: WebhookConfig,
}

/// Write the webhook configuration document next to the archive.
pub fn execute<S: DocumentStore, G: GitPort>(
    ctx: &AppContext<S, G>,
) -> Result<WebhookOutcome, AppError> {
    let archive_config = config::load_config(ctx.store())?;
    let settings = &archive_config.webhook;
    let webhook = WebhookConfig::from_settings(settings);

    let mut json = serde_json::to_string_pretty(&webhook)?;
    json.push('\n');
    ctx.store().write_text(&settings.file, &json)?;
    log::info!("Wrote {}", settings.file);

    Ok(WebhookOutcome { path: settings.file.clone(), config: webhook })
}
