use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

/// Only this many characters of the input are sent upstream.
pub const MAX_INPUT_CHARS: usize = 8000;

pub const SYSTEM_PROMPT: &str = "You are an expert content analyzer. Create clear, human-readable summaries.

CRITICAL INSTRUCTIONS:
- Write in natural, flowing sentences
- Make the summary 2-3 well-written paragraphs
- Extract 3-5 key insights as complete, standalone sentences
- Use professional but conversational language
- Focus on the most important and interesting information
- Do NOT use JSON formatting or technical jargon
- Do NOT include quotes, brackets, or code-like syntax

Response format:
SUMMARY:
[Your 2-3 paragraph summary here]

KEY POINTS:
1. [First key insight as a complete sentence]
2. [Second key insight as a complete sentence]
3. [Third key insight as a complete sentence]";

const USER_PREAMBLE: &str =
    "Please analyze this text and provide a clear summary with key insights:\n\n";

/// Keeps the first [`MAX_INPUT_CHARS`] characters without splitting a code point.
#[must_use]
pub fn truncate_input(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// System instruction plus the (truncated) user content.
#[must_use]
pub fn build_prompt(text: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(format!("{USER_PREAMBLE}{}", truncate_input(text))),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
