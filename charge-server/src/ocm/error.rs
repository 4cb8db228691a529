//! Open Charge Map client error types.

/// Errors from the directory-service client.
///
/// A non-success HTTP status is deliberately not represented here: the
/// client degrades it to an empty result list instead.
#[derive(Debug, thiserror::Error)]
pub enum OcmError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse the response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client configuration was invalid
    #[error("invalid configuration: {0}")]
    Config(String),
}
