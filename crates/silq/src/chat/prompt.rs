//! Writing-assistant preamble applied to every user prompt.

/// Instructional framing placed before the user's text.
pub const WRITING_ASSISTANT_PREAMBLE: &str =
    "You are a helpful writing assistant. Please help with the following request:\n\n";

/// Prepend the writing-assistant preamble. The user's prompt is kept verbatim.
pub fn augment_prompt(prompt: &str) -> String {
    let mut augmented = String::with_capacity(WRITING_ASSISTANT_PREAMBLE.len() + prompt.len());
    augmented.push_str(WRITING_ASSISTANT_PREAMBLE);
    augmented.push_str(prompt);
    augmented
}
