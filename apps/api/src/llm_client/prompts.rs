// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Closing instruction for prompts whose reply is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY the JSON object, no additional text.";

/// Closing instruction for prompts whose reply is split into plain-text items.
pub const PLAIN_TEXT_INSTRUCTION: &str = "Do not add headings, numbering, or commentary.";
