//! Error types for the inference client.

use thiserror::Error;

/// Errors produced by a transport while performing a single request.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("failed to parse response: {0}")]
    Malformed(String),
}

impl TransportError {
    /// Whether the failure is likely to succeed on a later attempt.
    ///
    /// Network-level failures and timeouts are transient, as are rate
    /// limits (429), request timeouts (408) and server errors (5xx).
    /// Other API statuses (bad request, auth) and undecodable responses
    /// are not.
    pub fn is_transient(&self) -> bool {
        match self {
            TransportError::Request(_) => true,
            TransportError::Api { status, .. } => {
                matches!(status, 408 | 429) || (500..600).contains(status)
            }
            TransportError::Malformed(_) => false,
        }
    }
}

/// Top-level errors surfaced to callers.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("configuration error: {0}")]
    Configuration(String),
    /// A non-retryable transport failure, surfaced on the attempt it occurred.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A transient failure that survived every allowed attempt.
    #[error("max retries exceeded after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: TransportError,
    },
    /// JSON mode was requested and every attempt produced invalid JSON.
    /// `content` is the last cleaned response text, `detail` the parse diagnostic.
    #[error("response is not valid JSON after {attempts} attempts: {detail}")]
    JsonValidation {
        attempts: u32,
        content: String,
        detail: String,
    },
}
