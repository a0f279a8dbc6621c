// All LLM prompt constants for the ATS module.

/// System prompt for ATS analysis.
pub const ATS_SYSTEM: &str =
    "You are an ATS optimization expert who helps job seekers improve their resumes.";

/// ATS analysis prompt template.
/// Replace: {json_only_instruction}, {resume_text}, {job_description}
pub const ATS_PROMPT_TEMPLATE: &str = r#"You are an ATS (Applicant Tracking System) expert. Analyze the following resume against the job description and provide detailed feedback.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}

Provide your analysis in the following JSON format:
{
    "score": <number between 0-100>,
    "scoreDescription": "<brief description of the score>",
    "missingKeywords": ["keyword1", "keyword2", ...],
    "matchingKeywords": ["keyword1", "keyword2", ...],
    "recommendations": ["recommendation1", "recommendation2", ...],
    "formattingIssues": ["issue1", "issue2", ...]
}

Guidelines:
- Score should reflect keyword match, formatting, and relevance
- Identify 5-8 missing keywords from the job description
- Identify 5-8 matching keywords found in the resume
- Provide 5-7 actionable recommendations
- List 2-4 formatting issues if any (or empty array if none)
- Be specific and helpful

{json_only_instruction}"#;
