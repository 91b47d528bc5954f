//! The retry-and-repair loop around a single logical request.
//!
//! [`RequestExecutor`] is a transparent passthrough on the success path: it
//! calls the transport once, post-processes the text, and returns. On
//! failure it classifies the error, backs off, fires the caller's callbacks
//! and reissues the full original request until the retry budget runs out.
//! It prints and logs nothing; the callbacks are the only observability.

use tokio::time::sleep;

use crate::error::{InferenceError, TransportError};
use crate::parsing::{normalize_and_validate, split_reasoning, JsonExpectation};
use crate::retry::{FailureKind, RetryConfig};
use crate::transport::Transport;
use crate::types::{ChatOutcome, ChatRequest, EmbeddingsRequest, EmbeddingsResponse};

/// Executes one logical request against a transport under a retry policy.
///
/// Holds no mutable state; concurrent calls sharing a transport and config
/// are independent, and each backoff wait is scoped to its own call.
/// Dropping the returned future during a wait cancels the call without
/// issuing further attempts.
pub struct RequestExecutor<'a, T: Transport> {
    transport: &'a T,
    retry: &'a RetryConfig,
}

impl<'a, T: Transport> RequestExecutor<'a, T> {
    pub fn new(transport: &'a T, retry: &'a RetryConfig) -> Self {
        Self { transport, retry }
    }

    /// Run a chat completion: transport call, reasoning separation, JSON
    /// validation, retries.
    ///
    /// The attempt counter increments only on retry, so `attempt` is the
    /// number of retries already spent and the total number of transport
    /// calls is at most `max_retries + 1`.
    pub async fn execute_chat(&self, request: &ChatRequest) -> Result<ChatOutcome, InferenceError> {
        let mut attempt = 0u32;

        loop {
            let response = match self.transport.chat(request).await {
                Ok(response) => response,
                Err(error) => {
                    let kind = FailureKind::from_transport(&error);
                    if !self.retry.should_retry(attempt, kind) {
                        return Err(match kind {
                            FailureKind::Fatal => InferenceError::Transport(error),
                            _ => InferenceError::RetriesExhausted {
                                attempts: attempt + 1,
                                source: error,
                            },
                        });
                    }
                    attempt += 1;
                    let delay = self.retry.compute_delay(attempt);
                    self.retry.notify_retry(attempt, &error, delay);
                    sleep(delay).await;
                    continue;
                }
            };

            // A success without usable text is malformed, not retryable.
            let Some(raw_text) = response.first_content().map(str::to_string) else {
                return Err(InferenceError::Transport(TransportError::Malformed(
                    "no message content in response".to_string(),
                )));
            };

            let (visible, reasoning) = match &request.reasoning_tags {
                Some(tags) => split_reasoning(&raw_text, tags),
                None => (raw_text, None),
            };

            if !request.wants_json() {
                return Ok(ChatOutcome {
                    content: visible,
                    reasoning,
                    raw: response,
                });
            }

            let check = normalize_and_validate(&visible, JsonExpectation::Object);
            match check.error {
                None => {
                    return Ok(ChatOutcome {
                        content: check.cleaned,
                        reasoning,
                        raw: response,
                    });
                }
                Some(detail) => {
                    if !self.retry.should_retry(attempt, FailureKind::InvalidJson) {
                        return Err(InferenceError::JsonValidation {
                            attempts: attempt + 1,
                            content: check.cleaned,
                            detail,
                        });
                    }
                    attempt += 1;
                    let delay = self.retry.compute_delay(attempt);
                    self.retry
                        .notify_json_retry(attempt, &format!("response is not valid JSON: {detail}"));
                    sleep(delay).await;
                }
            }
        }
    }

    /// Run an embeddings request under the same transport retry loop,
    /// without the parsing stages.
    pub async fn execute_embeddings(
        &self,
        request: &EmbeddingsRequest,
    ) -> Result<EmbeddingsResponse, InferenceError> {
        let mut attempt = 0u32;

        loop {
            match self.transport.embeddings(request).await {
                Ok(response) => return Ok(response),
                Err(error) => {
                    let kind = FailureKind::from_transport(&error);
                    if !self.retry.should_retry(attempt, kind) {
                        return Err(match kind {
                            FailureKind::Fatal => InferenceError::Transport(error),
                            _ => InferenceError::RetriesExhausted {
                                attempts: attempt + 1,
                                source: error,
                            },
                        });
                    }
                    attempt += 1;
                    let delay = self.retry.compute_delay(attempt);
                    self.retry.notify_retry(attempt, &error, delay);
                    sleep(delay).await;
                }
            }
        }
    }
}
