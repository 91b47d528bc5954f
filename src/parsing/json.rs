//! Normalization and validation of JSON-mode responses.
//!
//! Models frequently wrap JSON output in a markdown code fence even when
//! asked for a bare object. The normalizer strips a single fence pair and
//! checks that what remains parses.

use serde_json::Value;

/// What top-level JSON value the caller expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonExpectation {
    /// A JSON object (the default for structured responses).
    #[default]
    Object,
    /// Any valid JSON value.
    AnyValue,
}

/// Result of normalizing and validating a JSON-mode response.
#[derive(Debug, Clone)]
pub struct JsonCheck {
    /// The response text with markdown fences stripped; the best available
    /// string whether or not validation succeeded.
    pub cleaned: String,
    /// Parse diagnostic, present iff the cleaned text is not valid.
    pub error: Option<String>,
}

impl JsonCheck {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Strip a single markdown code-fence pair wrapping the whole text.
///
/// The opening fence may carry a language tag on the same line. The fence is
/// removed only when the text begins and ends with one after trimming;
/// nested fences are not unwrapped.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };
    let inner = match inner.split_once('\n') {
        Some((first_line, rest)) if first_line.trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
            rest
        }
        _ => inner,
    };
    inner.trim()
}

/// Normalize response text and check that it is valid JSON.
///
/// Never fails: parse errors are reported through [`JsonCheck::error`] and
/// the cleaned text remains available.
pub fn normalize_and_validate(text: &str, expectation: JsonExpectation) -> JsonCheck {
    let cleaned = strip_code_fence(text).to_string();
    let error = match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Object(_)) => None,
        Ok(_) if expectation == JsonExpectation::AnyValue => None,
        Ok(other) => Some(format!(
            "expected a top-level JSON object, got {}",
            value_kind(&other)
        )),
        Err(e) => Some(e.to_string()),
    };
    JsonCheck { cleaned, error }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_object_passes_through() {
        let check = normalize_and_validate(r#"{"a": 1}"#, JsonExpectation::Object);
        assert!(check.is_valid());
        assert_eq!(check.cleaned, r#"{"a": 1}"#);
    }

    #[test]
    fn test_fenced_json_is_unwrapped() {
        let check = normalize_and_validate("```json\n{\"a\":1}\n```", JsonExpectation::Object);
        assert!(check.is_valid());
        let value: Value = serde_json::from_str(&check.cleaned).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_fence_without_language_tag() {
        let check = normalize_and_validate("```\n{\"a\":1}\n```", JsonExpectation::Object);
        assert!(check.is_valid());
    }

    #[test]
    fn test_fence_with_surrounding_whitespace() {
        let check = normalize_and_validate("  ```json\n{\"a\":1}\n```  \n", JsonExpectation::Object);
        assert!(check.is_valid());
    }

    #[test]
    fn test_unclosed_fence_is_left_alone() {
        let check = normalize_and_validate("```json\n{\"a\":1}", JsonExpectation::Object);
        assert!(!check.is_valid());
        assert!(check.cleaned.starts_with("```"));
    }

    #[test]
    fn test_nested_fence_not_recursively_unwrapped() {
        let check = normalize_and_validate(
            "```\n```json\n{\"a\":1}\n```\n```",
            JsonExpectation::Object,
        );
        assert!(!check.is_valid());
    }

    #[test]
    fn test_malformed_json_reports_without_panicking() {
        let check = normalize_and_validate("{not json", JsonExpectation::Object);
        assert!(!check.is_valid());
        assert_eq!(check.cleaned, "{not json");
        assert!(check.error.is_some());
    }

    #[test]
    fn test_top_level_array_invalid_when_object_expected() {
        let check = normalize_and_validate("[1, 2, 3]", JsonExpectation::Object);
        assert!(!check.is_valid());
        assert!(check.error.unwrap().contains("an array"));

        let check = normalize_and_validate("[1, 2, 3]", JsonExpectation::AnyValue);
        assert!(check.is_valid());
    }
}
