//! Request and response types for the OpenAI-compatible wire protocol.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::retry::RetryConfig;

/// Message author role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single conversation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The output format the model must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Plain text (the provider default).
    Text,
    /// The response content must be a valid JSON object.
    JsonObject,
}

/// Start/end markers delimiting inline reasoning in model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningTags {
    pub start: String,
    pub end: String,
}

impl ReasoningTags {
    /// Create a tag pair from custom markers.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The `<think>`/`</think>` pair emitted by most reasoning models.
    pub fn think() -> Self {
        Self::new("<think>", "</think>")
    }
}

/// A chat-completion request.
///
/// Optional sampling parameters are skipped during serialization when unset,
/// so the request body only carries what the caller configured. `extra_body`
/// entries are flattened into the root of the JSON body for model-specific
/// parameters outside the standard payload.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    #[serde(flatten)]
    pub extra_body: HashMap<String, Value>,
    /// Markers for separating reasoning from answer text. Not sent on the wire.
    #[serde(skip)]
    pub reasoning_tags: Option<ReasoningTags>,
    /// Per-call retry override. Not sent on the wire.
    #[serde(skip)]
    pub retry: Option<RetryConfig>,
}

impl ChatRequest {
    /// Create a request for the given model and messages.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: model.into(),
            max_tokens: None,
            temperature: None,
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
            stop: None,
            seed: None,
            user: None,
            response_format: None,
            extra_body: HashMap::new(),
            reasoning_tags: None,
            retry: None,
        }
    }

    /// Set the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the nucleus sampling parameter.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set the stop sequences.
    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Set the sampling seed.
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Request that the model output a valid JSON object. The response will
    /// be validated and re-requested on failure.
    pub fn with_json_object(mut self) -> Self {
        self.response_format = Some(ResponseFormat::JsonObject);
        self
    }

    /// Set the response format explicitly.
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    /// Configure reasoning tag markers for this call.
    pub fn with_reasoning_tags(mut self, tags: ReasoningTags) -> Self {
        self.reasoning_tags = Some(tags);
        self
    }

    /// Override the client's retry configuration for this call.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Add a model-specific parameter to the root of the request body.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra_body.insert(key.into(), value);
        self
    }

    /// Whether JSON validation is requested for this call.
    pub(crate) fn wants_json(&self) -> bool {
        self.response_format == Some(ResponseFormat::JsonObject)
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: Option<u32>,
    #[serde(default)]
    pub completion_tokens: Option<u32>,
    #[serde(default)]
    pub total_tokens: Option<u32>,
}

/// Raw chat-completion response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Text content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// One completion choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: Option<u32>,
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The assistant message inside a choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Successful result of a chat completion.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    /// Final answer text. In JSON mode this is the cleaned, validated JSON.
    pub content: String,
    /// Reasoning text separated from the answer, when tags were configured
    /// and present in the output.
    pub reasoning: Option<String>,
    /// The raw provider payload.
    pub raw: ChatResponse,
}

/// An embeddings request.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingsRequest {
    pub input: Vec<String>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(flatten)]
    pub extra_body: HashMap<String, Value>,
    /// Per-call retry override. Not sent on the wire.
    #[serde(skip)]
    pub retry: Option<RetryConfig>,
}

impl EmbeddingsRequest {
    /// Create a request embedding the given inputs with the given model.
    pub fn new(model: impl Into<String>, input: Vec<String>) -> Self {
        Self {
            input,
            model: model.into(),
            dimensions: None,
            encoding_format: None,
            user: None,
            extra_body: HashMap::new(),
            retry: None,
        }
    }

    /// Set the requested embedding dimensions.
    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the encoding format (e.g. "float", "base64").
    pub fn with_encoding_format(mut self, format: impl Into<String>) -> Self {
        self.encoding_format = Some(format.into());
        self
    }

    /// Override the client's retry configuration for this call.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }
}

/// One embedding vector in an embeddings response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedding {
    #[serde(default)]
    pub index: Option<u32>,
    pub embedding: Vec<f32>,
}

/// Raw embeddings response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingsResponse {
    pub data: Vec<Embedding>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_parameters_are_filtered() {
        let request = ChatRequest::new("test-model", vec![ChatMessage::user("hi")]);
        let body = serde_json::to_value(&request).unwrap();
        let object = body.as_object().unwrap();
        assert!(!object.contains_key("temperature"));
        assert!(!object.contains_key("max_tokens"));
        assert!(!object.contains_key("response_format"));
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_format_wire_shape() {
        let request = ChatRequest::new("m", vec![ChatMessage::user("hi")]).with_json_object();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["response_format"], json!({"type": "json_object"}));
    }

    #[test]
    fn test_extra_body_is_flattened() {
        let request = ChatRequest::new("m", vec![ChatMessage::user("hi")])
            .with_extra("skip_special_tokens", json!(false));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["skip_special_tokens"], json!(false));
    }

    #[test]
    fn test_first_content() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "hello"}}]
        }))
        .unwrap();
        assert_eq!(response.first_content(), Some("hello"));

        let empty: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(empty.first_content(), None);
    }

    #[test]
    fn test_reasoning_tags_think() {
        let tags = ReasoningTags::think();
        assert_eq!(tags.start, "<think>");
        assert_eq!(tags.end, "</think>");
    }
}
