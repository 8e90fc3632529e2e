//! Generative text completion
//!
//! The assistant endpoints only need "prompt in, text out", so the provider
//! sits behind [`CompletionClient`]. [`GeminiClient`] talks to the Gemini
//! `generateContent` API; [`DisabledClient`] is installed when no API key is
//! configured and always fails, which sends every caller to its fallback.

mod gemini;

pub use gemini::GeminiClient;

use anyhow::Result;
use async_trait::async_trait;

/// Single-shot text completion
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a prompt and return the generated text
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Whether a provider is configured at all
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Client used when AI is switched off or has no key
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledClient;

#[async_trait]
impl CompletionClient for DisabledClient {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        anyhow::bail!("AI provider is not configured")
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Pull the JSON payload out of a model reply
///
/// Models wrap JSON in markdown fences (with or without a `json` tag) or
/// surround it with prose. A fenced object or array wins; otherwise the
/// outermost `{...}` or `[...]` span; otherwise the fenced text or the
/// trimmed input as-is.
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();
    let fenced = fenced_block(trimmed);

    if let Some(block) = fenced.filter(|b| b.starts_with(['{', '['])) {
        return block;
    }

    outermost_span(trimmed).or(fenced).unwrap_or(trimmed)
}

/// Contents of the first ``` fence, minus any language tag
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")? + 3;
    let end = start + text[start..].find("```")?;
    let body = &text[start..end];

    let body = if body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        let tag_len = body
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(body.len());
        &body[tag_len..]
    } else {
        body
    };

    Some(body.trim())
}

fn outermost_span(text: &str) -> Option<&str> {
    let object = span(text, '{', '}');
    let array = span(text, '[', ']');
    let (start, end) = match (object, array) {
        // Whichever opens first is the outer value
        (Some(o), Some(a)) => {
            if o.0 < a.0 {
                o
            } else {
                a
            }
        }
        (Some(o), None) => o,
        (None, Some(a)) => a,
        (None, None) => return None,
    };
    Some(&text[start..=end])
}

fn span(text: &str, open: char, close: char) -> Option<(usize, usize)> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then_some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn test_disabled_client_always_fails() {
        let client = DisabledClient;
        assert!(!client.is_enabled());
        assert!(client.complete("hello").await.is_err());
    }

    #[rstest]
    #[case::plain(r#"{"a": 1}"#, r#"{"a": 1}"#)]
    #[case::json_fence("```json\n{\"a\": 1}\n```", r#"{"a": 1}"#)]
    #[case::bare_fence("```\n[1, 2]\n```", "[1, 2]")]
    #[case::prose("Sure! Here it is: {\"a\": 1} Enjoy.", r#"{"a": 1}"#)]
    #[case::array_of_objects("Result: [{\"a\": 1}, {\"b\": 2}]", r#"[{"a": 1}, {"b": 2}]"#)]
    #[case::object_with_array(r#"{"items": [1, 2]}"#, r#"{"items": [1, 2]}"#)]
    #[case::inline_json_fence("```json {\"a\": 1} ```", r#"{"a": 1}"#)]
    #[case::upper_case_tag("```JSON\n{\"a\": 1}\n```", r#"{"a": 1}"#)]
    #[case::fence_without_json("See ```text\nnone\n``` then {\"a\": 1}", r#"{"a": 1}"#)]
    #[case::fenced_number("```\n300\n```", "300")]
    #[case::no_json("  nothing here  ", "nothing here")]
    fn test_extract_json(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(extract_json(input), expected);
    }
}
