//! GitHub `repository_dispatch` client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue, RETRY_AFTER, USER_AGENT};
use url::Url;

use crate::domain::{AppError, DispatchPayload, NotifyConfig};
use crate::ports::{DispatchClient, DispatchResponse};

const GITHUB_JSON: &str = "application/vnd.github+json";
const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const GITHUB_API_VERSION: &str = "2022-11-28";
const DEFAULT_STATUS_MESSAGE: &str = "Dispatch request failed";

/// HTTP transport for the dispatch API.
///
/// This client performs a single request per call. Retry behavior is implemented
/// by `RetryingDispatchClient`.
#[derive(Clone)]
pub struct HttpDispatchClient {
    token: String,
    dispatch_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpDispatchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDispatchClient")
            .field("dispatch_url", &self.dispatch_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpDispatchClient {
    /// Create a client posting to `dispatch_url` with the given bearer token.
    pub fn new(token: String, dispatch_url: Url, config: &NotifyConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::DispatchError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { token, dispatch_url, client })
    }

    /// Read the token from the environment variable named in the configuration.
    pub fn from_env(dispatch_url: Url, config: &NotifyConfig) -> Result<Self, AppError> {
        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(config.token_env.clone()))?;

        Self::new(token, dispatch_url, config)
    }

    fn send_request(&self, payload: &DispatchPayload) -> Result<DispatchResponse, AppError> {
        let response = self
            .client
            .post(self.dispatch_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, GITHUB_JSON)
            .header(USER_AGENT, concat!("bntf-docs/", env!("CARGO_PKG_VERSION")))
            .header(GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION)
            .json(payload)
            .send()
            .map_err(|e| AppError::DispatchError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let retry_after_ms = response.headers().get(RETRY_AFTER).and_then(parse_retry_after_ms);

        if status.is_success() {
            log::info!("Dispatch accepted with status {}", status.as_u16());
            return Ok(DispatchResponse { status: status.as_u16() });
        }

        let body_text = response.text().unwrap_or_default();
        let mut message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        if let Some(value) = retry_after_ms {
            message.push_str(&format!(" (retry_after_ms={})", value));
        }

        Err(AppError::DispatchError { message, status: Some(status.as_u16()) })
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn parse_retry_after_ms(value: &HeaderValue) -> Option<u64> {
    let raw = value.to_str().ok()?.trim();
    let seconds = raw.parse::<u64>().ok()?;
    Some(seconds.saturating_mul(1000))
}

impl DispatchClient for HttpDispatchClient {
    fn dispatch(&self, payload: &DispatchPayload) -> Result<DispatchResponse, AppError> {
        self.send_request(payload)
    }
}
