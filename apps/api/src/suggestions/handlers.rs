//! Axum route handler for the Suggestions API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestions::generator::generate_suggestions;
use crate::suggestions::kind::SuggestionKind;

/// Wire shape of a suggestion request. `type` stays a raw string here so an
/// unknown value is reported as a 400 rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
}

/// POST /ai/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let Json(request) = payload?;

    let kind = request
        .kind
        .parse::<SuggestionKind>()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    info!("Generating AI suggestions for type: {kind}");

    let context = request.context.unwrap_or_default();
    let suggestions = generate_suggestions(state.llm.as_ref(), kind, &context).await?;

    Ok(Json(SuggestionResponse { suggestions }))
}
