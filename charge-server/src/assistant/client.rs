//! Chat-completion HTTP client.
//!
//! Sends a single system + user exchange per call. No transcript history
//! travels with the request; continuity comes entirely from the station
//! context the caller interpolates.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use super::error::ChatError;
use super::prompt::system_prompt;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, RequestMessage};

/// Default base URL for the chat-completion API.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model identifier.
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Maximum tokens requested per reply.
const MAX_TOKENS: u32 = 500;

/// Sampling temperature.
const TEMPERATURE: f32 = 0.7;

/// Configuration for the chat client.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// API key for bearer authentication
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Base URL for the API
    pub base_url: String,
}

impl ChatConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the chat-completion endpoint.
///
/// No request timeout is set; the endpoint's own limits apply.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl ChatClient {
    /// Create a new chat client with the given configuration.
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        let mut headers = HeaderMap::new();

        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| ChatError::Config("invalid API key format".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            model: config.model,
        })
    }

    /// Send one exchange to the chat-completion endpoint.
    ///
    /// Exactly two messages go out: the system instruction (with `context`
    /// interpolated) and the user message.
    pub async fn complete(&self, user_message: &str, context: &str) -> Result<String, ChatError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                RequestMessage {
                    role: "system".to_string(),
                    content: system_prompt(context),
                },
                RequestMessage {
                    role: "user".to_string(),
                    content: user_message.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let url = format!("{}/chat/completions", self.base_url);

        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| ChatError::Json {
                message: e.to_string(),
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ChatError::EmptyResponse)
    }

    /// Converse with the assistant, degrading every failure to a reply.
    ///
    /// Failures come back as a "Sorry, I encountered an error: …" string;
    /// callers treat it like any other reply and it lands in the transcript
    /// the same way.
    pub async fn converse(&self, user_message: &str, context: &str) -> String {
        match self.complete(user_message, context).await {
            Ok(reply) => reply,
            Err(e) => format!("Sorry, I encountered an error: {e}"),
        }
    }
}
