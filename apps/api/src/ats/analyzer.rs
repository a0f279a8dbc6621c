//! ATS Analyzer — scores a resume against a job description.
//!
//! Flow: render resume → build prompt → one model call → strip fences → parse.
//! A reply that does not fit the six-field schema is replaced by
//! `AtsAnalysis::fallback()` and returned as a success. Only a failed model
//! call is an error.

use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::{error, info};

use crate::ats::prompts::{ATS_PROMPT_TEMPLATE, ATS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{strip_json_fences, ChatModel, ChatRequest};
use crate::models::resume::ResumeData;
use crate::render::render_resume_text;

/// Low temperature: the reply must be machine-parseable.
pub const ATS_TEMPERATURE: f32 = 0.3;
/// Six fields with keyword and recommendation lists need room.
pub const ATS_MAX_TOKENS: u32 = 1500;

/// Structured ATS feedback. Every field is required when parsing a model reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    /// 0 – 100
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u8,
    pub score_description: String,
    pub missing_keywords: Vec<String>,
    pub matching_keywords: Vec<String>,
    pub recommendations: Vec<String>,
    pub formatting_issues: Vec<String>,
}

impl AtsAnalysis {
    /// Substituted when the model reply cannot be parsed. Callers cannot tell it
    /// apart from a genuine analysis.
    pub fn fallback() -> Self {
        Self {
            score: 70,
            score_description: "Good match with room for improvement".to_string(),
            missing_keywords: vec!["Unable to extract keywords".to_string()],
            matching_keywords: vec!["Analysis in progress".to_string()],
            recommendations: vec![
                "Add more specific keywords from the job description".to_string()
            ],
            formatting_issues: vec![],
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

/// Accepts a whole value in 0..=100 given as a number or numeric string
/// (`85`, `85.0`, `"85"`).
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawScore::deserialize(deserializer)? {
        RawScore::Number(n) => n,
        RawScore::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("score {s:?} is not a number")))?,
    };
    if value.fract() == 0.0 && (0.0..=100.0).contains(&value) {
        Ok(value as u8)
    } else {
        Err(de::Error::custom(format!(
            "score {value} is not a whole number between 0 and 100"
        )))
    }
}

/// Analyzes `resume` against `job_description` with exactly one model call.
pub async fn analyze_resume(
    llm: &dyn ChatModel,
    resume: &ResumeData,
    job_description: &str,
) -> Result<AtsAnalysis, AppError> {
    let resume_text = render_resume_text(resume);
    let prompt = build_ats_prompt(&resume_text, job_description);

    let raw = llm
        .complete(ChatRequest {
            system: ATS_SYSTEM,
            prompt: &prompt,
            temperature: ATS_TEMPERATURE,
            max_tokens: ATS_MAX_TOKENS,
        })
        .await
        .map_err(|e| {
            error!("Error analyzing ATS compatibility: {e}");
            AppError::Llm(format!("Failed to analyze ATS compatibility: {e}"))
        })?;

    match parse_analysis(&raw) {
        Ok(analysis) => {
            info!("ATS analysis complete: score {}/100", analysis.score);
            Ok(analysis)
        }
        Err(e) => {
            error!("Failed to parse AI response ({e}): {raw}");
            Ok(AtsAnalysis::fallback())
        }
    }
}

fn build_ats_prompt(resume_text: &str, job_description: &str) -> String {
    ATS_PROMPT_TEMPLATE
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION)
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

/// Parses a model reply, optionally wrapped in a ``` / ```json fence.
pub fn parse_analysis(raw: &str) -> Result<AtsAnalysis, serde_json::Error> {
    serde_json::from_str(strip_json_fences(raw))
}
