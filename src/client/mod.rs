//! High-level clients wrapping a transport with retry and normalization.

mod chat;
mod embeddings;

pub use chat::ChatCompletionsClient;
pub use embeddings::EmbeddingsClient;
