//! # Inference Plus
//!
//! A resilience layer over OpenAI-compatible inference APIs.
//!
//! This library wraps chat-completion and embedding calls with automatic
//! retry on transient failures, validation of JSON-formatted model output,
//! and separation of inline reasoning (`<think>...</think>`) from the final
//! answer. The common success path is a transparent passthrough; by default
//! nothing is printed or logged, and retry events are observable only
//! through opt-in callbacks.
//!
//! ## Basic usage
//!
//! ```rust,no_run
//! use inference_plus::{ChatCompletionsClient, ChatMessage, ChatRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Reads INFERENCE_ENDPOINT and INFERENCE_API_KEY.
//!     let client = ChatCompletionsClient::from_env()?;
//!
//!     let request = ChatRequest::new(
//!         "gpt-4o-mini",
//!         vec![
//!             ChatMessage::system("You are a helpful assistant."),
//!             ChatMessage::user("Why is the sky blue?"),
//!         ],
//!     );
//!
//!     let outcome = client.complete(request).await?;
//!     println!("{}", outcome.content);
//!     Ok(())
//! }
//! ```
//!
//! ## JSON mode with retry callbacks
//!
//! ```rust,no_run
//! use inference_plus::{
//!     ChatCompletionsClient, ChatMessage, ChatRequest, ClientConfig, RetryConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let retry = RetryConfig::new(3)
//!         .on_retry(|attempt, max, error, delay| {
//!             eprintln!("retry {attempt}/{max} in {delay:?}: {error}");
//!         })
//!         .on_json_retry(|attempt, max, message| {
//!             eprintln!("JSON retry {attempt}/{max}: {message}");
//!         });
//!
//!     let config = ClientConfig::from_env()?.with_retry(retry);
//!     let client = ChatCompletionsClient::new(config)?;
//!
//!     let request = ChatRequest::new(
//!         "gpt-4o-mini",
//!         vec![ChatMessage::user("List three colors as a JSON object.")],
//!     )
//!     .with_json_object();
//!
//!     let outcome = client.complete(request).await?;
//!     println!("validated JSON: {}", outcome.content);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod executor;
pub mod parsing;
pub mod retry;
pub mod transport;
pub mod types;

pub use client::{ChatCompletionsClient, EmbeddingsClient};
pub use config::{ClientConfig, API_KEY_ENV, ENDPOINT_ENV};
pub use error::{InferenceError, TransportError};
pub use executor::RequestExecutor;
pub use retry::{FailureKind, JsonRetryCallback, RetryCallback, RetryConfig};
pub use transport::{HttpTransport, Transport};
pub use types::{
    ChatMessage, ChatOutcome, ChatRequest, ChatResponse, Choice, ChoiceMessage, Embedding,
    EmbeddingsRequest, EmbeddingsResponse, ReasoningTags, ResponseFormat, Role, Usage,
};
