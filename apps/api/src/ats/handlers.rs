//! Axum route handler for the ATS API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::ats::analyzer::{analyze_resume, AtsAnalysis};
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;

/// Both fields are optional on the wire so that a missing field is reported
/// with the same 400 as an empty one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysisRequest {
    #[serde(default)]
    pub resume_data: Option<ResumeData>,
    #[serde(default)]
    pub job_description: Option<String>,
}

/// POST /ai/ats/analyze
pub async fn handle_ats_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AtsAnalysisRequest>, JsonRejection>,
) -> Result<Json<AtsAnalysis>, AppError> {
    let Json(request) = payload?;

    let job_description = request
        .job_description
        .as_deref()
        .map(str::trim)
        .filter(|jd| !jd.is_empty())
        .ok_or_else(|| AppError::Validation("Job description is required".to_string()))?;

    let resume = request
        .resume_data
        .as_ref()
        .filter(|resume| !resume.is_empty())
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;

    info!("Analyzing ATS compatibility");

    let analysis = analyze_resume(state.llm.as_ref(), resume, job_description).await?;

    Ok(Json(analysis))
}
