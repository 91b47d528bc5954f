//! Separation of inline reasoning from answer text.

use crate::types::ReasoningTags;

/// Split raw model output into visible answer text and reasoning text.
///
/// Only the first tag pair is honored: reasoning is the substring strictly
/// between the first start tag and the first end tag after it, and the
/// visible text is everything before and after, trimmed. Any later
/// tag-delimited regions remain in the visible text verbatim.
///
/// When the start tag is present but the end tag never appears (truncated
/// generation), the split is best-effort: everything after the start tag is
/// treated as reasoning and the text before it as the answer.
///
/// This is a two-index string scan, not a markup parser.
pub fn split_reasoning(raw: &str, tags: &ReasoningTags) -> (String, Option<String>) {
    let Some(start) = raw.find(&tags.start) else {
        return (raw.to_string(), None);
    };
    let after_start = start + tags.start.len();

    match raw[after_start..].find(&tags.end) {
        Some(offset) => {
            let end = after_start + offset;
            let reasoning = raw[after_start..end].trim();
            let mut visible = String::with_capacity(raw.len() - (end - start));
            visible.push_str(&raw[..start]);
            visible.push_str(&raw[end + tags.end.len()..]);
            let visible = visible.trim().to_string();
            let reasoning = (!reasoning.is_empty()).then(|| reasoning.to_string());
            (visible, reasoning)
        }
        None => {
            let reasoning = raw[after_start..].trim();
            let visible = raw[..start].trim().to_string();
            let reasoning = (!reasoning.is_empty()).then(|| reasoning.to_string());
            (visible, reasoning)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn think() -> ReasoningTags {
        ReasoningTags::think()
    }

    #[test]
    fn test_no_tags_returns_input_unchanged() {
        let raw = "just a plain answer, no markers  ";
        let (visible, reasoning) = split_reasoning(raw, &think());
        assert_eq!(visible, raw);
        assert_eq!(reasoning, None);
    }

    #[test]
    fn test_splits_reasoning_and_answer() {
        let (visible, reasoning) = split_reasoning("<think>X</think>Y", &think());
        assert_eq!(visible, "Y");
        assert_eq!(reasoning, Some("X".to_string()));
    }

    #[test]
    fn test_text_before_and_after_is_joined() {
        let raw = "prefix <think>why</think> suffix";
        let (visible, reasoning) = split_reasoning(raw, &think());
        assert_eq!(visible, "prefix  suffix");
        assert_eq!(reasoning, Some("why".to_string()));
    }

    #[test]
    fn test_truncated_output_is_best_effort() {
        let raw = "answer so far<think>reasoning that never closes";
        let (visible, reasoning) = split_reasoning(raw, &think());
        assert_eq!(visible, "answer so far");
        assert_eq!(reasoning, Some("reasoning that never closes".to_string()));
    }

    #[test]
    fn test_only_first_pair_is_honored() {
        let raw = "<think>first</think>answer<think>second</think>";
        let (visible, reasoning) = split_reasoning(raw, &think());
        assert_eq!(visible, "answer<think>second</think>");
        assert_eq!(reasoning, Some("first".to_string()));
    }

    #[test]
    fn test_empty_reasoning_is_none() {
        let (visible, reasoning) = split_reasoning("<think>  </think>answer", &think());
        assert_eq!(visible, "answer");
        assert_eq!(reasoning, None);
    }

    #[test]
    fn test_custom_tags() {
        let tags = ReasoningTags::new("[[", "]]");
        let (visible, reasoning) = split_reasoning("[[plan]] go left", &tags);
        assert_eq!(visible, "go left");
        assert_eq!(reasoning, Some("plan".to_string()));
    }
}
