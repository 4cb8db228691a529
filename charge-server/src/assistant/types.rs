//! Chat-completion API request and response DTOs.

use serde::{Deserialize, Serialize};

/// Request body for the chat-completion endpoint.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier.
    pub model: String,

    /// Message history; always exactly system + user here.
    pub messages: Vec<RequestMessage>,

    /// Maximum tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,
}

/// A single outbound message.
#[derive(Debug, Serialize)]
pub struct RequestMessage {
    pub role: String,
    pub content: String,
}

/// Response body from the chat-completion endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

/// One generated completion.
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

/// The generated message.
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    /// Generated text. Absent for non-text completions.
    pub content: Option<String>,
}
