//! Chat-completion client error types.

/// Errors from the chat-completion client.
///
/// `ChatClient::converse` degrades every variant to an apologetic reply
/// string; the typed error is only visible through `complete`.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Response carried no usable text
    #[error("response contained no message content")]
    EmptyResponse,

    /// Client configuration was invalid
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ChatError::Api {
            status: 429,
            message: "rate limit".into(),
        };
        assert_eq!(err.to_string(), "API error 429: rate limit");

        let err = ChatError::EmptyResponse;
        assert_eq!(err.to_string(), "response contained no message content");
    }
}
