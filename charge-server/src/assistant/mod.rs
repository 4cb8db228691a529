//! Chat assistant client.
//!
//! This module provides an HTTP client for a chat-completion endpoint,
//! used to answer free-form EV questions grounded in the current station
//! recommendations.
//!
//! Key characteristics:
//! - Exactly two messages per call (system instruction + user message);
//!   no transcript history is ever sent
//! - Failures degrade to an apologetic reply string via `converse`, so the
//!   caller always has something to put in the transcript
//! - One attempt per call, no retries

mod client;
mod error;
mod prompt;
mod types;

pub use client::{ChatClient, ChatConfig};
pub use error::ChatError;
pub use prompt::system_prompt;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, Choice, RequestMessage, ResponseMessage};
