//! Content Suggestion builder.
//!
//! Flow: pick template for the kind → one model call → split by the kind's delimiter.
//! The requested counts (3 bullets, 8-10 skills, 3 summaries) are not enforced.

use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::llm_client::{ChatModel, ChatRequest};
use crate::suggestions::kind::SuggestionKind;
use crate::suggestions::prompts::{
    EXPERIENCE_PROMPT_TEMPLATE, SKILLS_PROMPT_TEMPLATE, SUGGESTION_SYSTEM,
    SUMMARY_PROMPT_TEMPLATE,
};

/// Creativity over determinism for all three kinds.
pub const SUGGESTION_TEMPERATURE: f32 = 0.7;
pub const SUGGESTION_MAX_TOKENS: u32 = 500;

const SUMMARY_DELIMITER: &str = "---";

/// Generates suggestions for `kind`, steering the model with free-text `context`.
///
/// Issues exactly one model call. Upstream failures are returned as `AppError::Llm`.
pub async fn generate_suggestions(
    llm: &dyn ChatModel,
    kind: SuggestionKind,
    context: &str,
) -> Result<Vec<String>, AppError> {
    let prompt = build_suggestion_prompt(kind, context);

    let raw = llm
        .complete(ChatRequest {
            system: SUGGESTION_SYSTEM,
            prompt: &prompt,
            temperature: SUGGESTION_TEMPERATURE,
            max_tokens: SUGGESTION_MAX_TOKENS,
        })
        .await
        .map_err(|e| {
            error!("Error generating {kind} suggestions: {e}");
            AppError::Llm(format!("Failed to generate suggestions: {e}"))
        })?;

    let suggestions = split_suggestions(kind, &raw);
    info!("Generated {} {kind} suggestions", suggestions.len());

    Ok(suggestions)
}

fn build_suggestion_prompt(kind: SuggestionKind, context: &str) -> String {
    let template = match kind {
        SuggestionKind::Experience => EXPERIENCE_PROMPT_TEMPLATE,
        SuggestionKind::Skills => SKILLS_PROMPT_TEMPLATE,
        SuggestionKind::Summary => SUMMARY_PROMPT_TEMPLATE,
    };

    template
        .replace("{format_instruction}", PLAIN_TEXT_INSTRUCTION)
        .replace("{context}", context.trim())
}

/// Splits raw model text into trimmed, non-empty items in emission order.
///
/// experience → line breaks, skills → commas, summary → `---`.
pub fn split_suggestions(kind: SuggestionKind, raw: &str) -> Vec<String> {
    let raw = raw.trim();
    let pieces: Vec<&str> = match kind {
        SuggestionKind::Experience => raw.lines().collect(),
        SuggestionKind::Skills => raw.split(',').collect(),
        SuggestionKind::Summary => raw.split(SUMMARY_DELIMITER).collect(),
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
