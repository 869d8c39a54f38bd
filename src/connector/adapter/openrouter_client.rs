use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{ApiKey, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "xai/grok-code-fast-1";
const COMPLETIONS_PATH: &str = "/chat/completions";
/// Upper bound on how much of an error body ends up in an error message.
const MAX_DETAIL_CHARS: usize = 500;

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completion response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for OpenAI-compatible chat-completion endpoints, OpenRouter by
/// default.
///
/// One `POST {base_url}/chat/completions` per call, authenticated with the
/// caller's key as a bearer token. No retries and no timeout override: the
/// call runs until the server answers or the transport gives up.
pub struct OpenRouterClient {
    client: reqwest::Client,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenRouterClient {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            model: model.into(),
            url,
        }
    }

    /// Pull the first choice's message text out of a success body.
    fn extract_content(body: &str) -> Result<String, DomainError> {
        let response: ApiResponse = serde_json::from_str(body)
            .map_err(|e| DomainError::malformed(format!("failed to parse response: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::malformed("response contains no choices"))?
            .message
            .content
            .ok_or_else(|| DomainError::malformed("first choice has no message content"))
    }

    /// Prefer the provider's `error.message`; fall back to the raw body.
    fn error_detail(body: &str) -> String {
        let detail = match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => envelope.error.message,
            Err(_) => body.trim().to_string(),
        };
        truncate(&detail, MAX_DETAIL_CHARS)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[async_trait]
impl ChatClient for OpenRouterClient {
    async fn complete(&self, api_key: &ApiKey, prompt: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::transport(e.to_string()))?;

        let status = response.status();
        debug!("Chat-completion endpoint answered {status}");

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            let mut detail = Self::error_detail(&body);
            if detail.is_empty() {
                detail = status
                    .canonical_reason()
                    .unwrap_or("empty response body")
                    .to_string();
            }
            warn!("Chat-completion endpoint returned {status}: {detail}");
            return Err(DomainError::upstream(status.as_u16(), detail));
        }

        Self::extract_content(&body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
