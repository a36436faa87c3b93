//! Chat-completion HTTP client for idea generation.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::{PautaError, Result};

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Placeholder value that counts as "not configured".
const PLACEHOLDER_KEY: &str = "your-api-key-here";

/// Configuration for the content-generation endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API credential; `None` when unset or still the placeholder
    pub api_key: Option<String>,

    /// Base URL of the chat-completion API
    pub base_url: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Output length bound
    pub max_tokens: u32,

    /// Fixed sampling temperature
    pub temperature: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 1000,
            temperature: 0.8,
        }
    }
}

impl ApiConfig {
    /// Reads the credential from the environment. The literal placeholder
    /// value from the sample configuration is treated as missing.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty() && key != PLACEHOLDER_KEY);
        Self {
            api_key,
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

/// One-shot chat-completion client: a single awaited POST per generation,
/// no retry or backoff. Failures are classified so the caller can decide
/// between demo fallback (missing key, quota) and surfacing the error.
pub struct ChatClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ChatClient {
    /// Creates a client over the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Whether a usable credential is configured.
    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Sends one system+user message pair and returns the first choice's
    /// message text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(PautaError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| PautaError::ContentGeneration {
                message: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_api_failure(status, &body));
        }

        let reply: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| PautaError::ContentGeneration {
                    message: format!("unreadable response body: {e}"),
                })?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| PautaError::ContentGeneration {
                message: "response contained no choices".to_string(),
            })
    }
}

/// Classifies an API failure: HTTP 429 or quota-shaped error messages
/// degrade to demo content, everything else surfaces as-is.
fn classify_api_failure(status: StatusCode, body: &str) -> PautaError {
    if status == StatusCode::TOO_MANY_REQUESTS || body.to_lowercase().contains("quota") {
        PautaError::QuotaExceeded {
            message: format!("HTTP {status}"),
        }
    } else {
        PautaError::ContentGeneration {
            message: format!("HTTP {status}: {}", body.chars().take(200).collect::<String>()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_failures_are_classified_for_fallback() {
        let err = classify_api_failure(StatusCode::TOO_MANY_REQUESTS, "");
        assert!(err.is_demo_fallback());

        let err = classify_api_failure(
            StatusCode::FORBIDDEN,
            "{\"error\":{\"message\":\"You exceeded your current quota\"}}",
        );
        assert!(err.is_demo_fallback());
    }

    #[test]
    fn other_failures_are_not_fallback() {
        let err = classify_api_failure(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(!err.is_demo_fallback());
    }

    #[test]
    fn missing_key_is_fallback() {
        assert!(PautaError::MissingApiKey.is_demo_fallback());
    }
}
