//! Groq completion API client
//!
//! Implements the [`CompletionClient`] seam for the Groq OpenAI-compatible
//! Chat Completions endpoint. One blocking request per itinerary, bounded
//! by the configured timeout; no retries and no streaming.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::{Result, TravelMaxError};

/// How much of an error body to echo back to the user
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// Seam for the single outbound completion call.
///
/// Tests substitute a stub implementation so no network traffic happens.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one completion request and return the generated text.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// HTTP client for the Groq Chat Completions API
pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqClient {
    /// Create a new client from configuration.
    ///
    /// Fails with a configuration error when the API key is absent, so a
    /// misconfigured deployment is caught at startup rather than on the
    /// first user request.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("TravelMAX/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TravelMaxError::api(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        debug!(model = %self.model, "Sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TravelMaxError::api("the completion request timed out")
                } else {
                    TravelMaxError::api(format!("could not reach the completion API: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let preview: String = detail.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
            warn!(%status, "Completion request rejected");
            return Err(TravelMaxError::api(format!(
                "the completion API returned {status}: {preview}"
            )));
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            TravelMaxError::api(format!("invalid response from the completion API: {e}"))
        })?;

        extract_content(chat)
    }
}

/// Pull the generated text out of a chat response.
///
/// An empty body or a body without choices is an API failure, never an
/// empty success.
fn extract_content(chat: ChatResponse) -> Result<String> {
    let content = chat
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(TravelMaxError::api("the model returned an empty response"));
    }

    Ok(content)
}

/// Chat Completions response envelope; only the fields we read
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
