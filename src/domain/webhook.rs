//! Webhook configuration document for the hosting side of automatic updates.

use serde::{Deserialize, Serialize};

use super::WebhookSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfig {
    pub name: String,
    pub description: String,
    pub events: Vec<String>,
    pub config: WebhookEndpoint,
    pub triggers: WebhookTriggers,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEndpoint {
    pub url: String,
    pub content_type: String,
    /// Name of the environment variable holding the secret; the value is never written.
    pub secret_env: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookTriggers {
    pub on_push: bool,
    pub on_pdf_change: bool,
    pub on_index_update: bool,
}

impl WebhookConfig {
    pub fn from_settings(settings: &WebhookSettings) -> Self {
        Self {
            name: "BNTF Document Auto-Update".to_string(),
            description: "Updates the app when documents change".to_string(),
            events: settings.events.clone(),
            config: WebhookEndpoint {
                url: settings.url.to_string(),
                content_type: "application/json".to_string(),
                secret_env: settings.secret_env.clone(),
            },
            triggers: WebhookTriggers {
                on_push: settings.events.iter().any(|event| event == "push"),
                on_pdf_change: true,
                on_index_update: true,
            },
            actions: ["regenerate_index", "notify_app", "update_cdn_cache"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
