//! Chat-completions client.

use crate::config::ClientConfig;
use crate::error::InferenceError;
use crate::executor::RequestExecutor;
use crate::retry::RetryConfig;
use crate::transport::{HttpTransport, Transport};
use crate::types::{ChatOutcome, ChatRequest};

/// Chat client with automatic retry, JSON validation and reasoning
/// separation.
///
/// Generic over the transport so the full client can be driven by a
/// scripted transport in tests; defaults to [`HttpTransport`].
pub struct ChatCompletionsClient<T: Transport = HttpTransport> {
    transport: T,
    retry: RetryConfig,
}

impl ChatCompletionsClient<HttpTransport> {
    /// Create a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, InferenceError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            transport,
            retry: config.retry,
        })
    }

    /// Create a client from `INFERENCE_ENDPOINT` and `INFERENCE_API_KEY`.
    pub fn from_env() -> Result<Self, InferenceError> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> ChatCompletionsClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(transport: T, retry: RetryConfig) -> Self {
        Self { transport, retry }
    }

    /// Generate a chat completion.
    ///
    /// When the request asks for a JSON object the response is validated and
    /// re-requested on failure; when reasoning tags are configured the
    /// reasoning is split out of the content. A `retry` set on the request
    /// overrides the client's configuration for this call only.
    pub async fn complete(&self, request: ChatRequest) -> Result<ChatOutcome, InferenceError> {
        let retry = request.retry.as_ref().unwrap_or(&self.retry);
        RequestExecutor::new(&self.transport, retry)
            .execute_chat(&request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::transport::mock::{chat_response, MockTransport};
    use crate::types::ChatMessage;

    #[tokio::test]
    async fn test_complete_passes_through_on_success() {
        let transport = MockTransport::new();
        transport.push_chat(Ok(chat_response("hello")));

        let client = ChatCompletionsClient::with_transport(transport, RetryConfig::default());
        let outcome = client
            .complete(ChatRequest::new("m", vec![ChatMessage::user("hi")]))
            .await
            .unwrap();

        assert_eq!(outcome.content, "hello");
    }

    #[tokio::test]
    async fn test_per_request_retry_override_wins() {
        let transport = MockTransport::new();
        transport.push_chat(Err(crate::error::TransportError::Api {
            status: 503,
            message: "unavailable".to_string(),
        }));
        transport.push_chat(Ok(chat_response("recovered")));

        let fired = Arc::new(Mutex::new(0u32));
        let count = fired.clone();
        let per_call = RetryConfig::new(1)
            .with_delay(Duration::from_millis(1))
            .on_retry(move |_, _, _, _| *count.lock().unwrap() += 1);

        // Client default would not retry at all.
        let client = ChatCompletionsClient::with_transport(transport, RetryConfig::new(0));
        let outcome = client
            .complete(
                ChatRequest::new("m", vec![ChatMessage::user("hi")]).with_retry(per_call),
            )
            .await
            .unwrap();

        assert_eq!(outcome.content, "recovered");
        assert_eq!(*fired.lock().unwrap(), 1);
    }
}
