use std::time::Duration;

use crate::types::{ApiErrorBody, ChatCompletion, ChatMessage, ChatRequest};
use crate::{ChatError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

// ─── ChatBackend ──────────────────────────────────────────────────────────

/// Anything that can turn a conversation into a single assistant reply.
///
/// Implemented by [`ChatClient`] for real endpoints and by scripted fakes in
/// tests.
pub trait ChatBackend {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

// ─── ClientConfig ─────────────────────────────────────────────────────────

/// Connection settings for a [`ChatClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    /// Base URL without the `/chat/completions` suffix.
    pub base_url: String,
    pub model: String,
    /// Applies to the whole request, including reading the body.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// ─── ChatClient ───────────────────────────────────────────────────────────

pub struct ChatClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl ChatClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

impl ChatBackend for ChatClient {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let body = ChatRequest {
            model: &self.config.model,
            messages,
        };

        tracing::debug!(
            model = %self.config.model,
            messages = messages.len(),
            "sending chat completion"
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            // Prefer the API's own message; fall back to the raw body.
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or(text);
            return Err(ChatError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletion =
            serde_json::from_str(&text).map_err(|source| ChatError::Decode {
                body: text.clone(),
                source,
            })?;

        if let Some(usage) = completion.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "chat completion usage"
            );
        }

        completion
            .first_text()
            .map(str::to_owned)
            .ok_or(ChatError::EmptyResponse)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
