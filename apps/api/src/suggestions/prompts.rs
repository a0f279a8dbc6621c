// All LLM prompt constants for the Suggestions module.
// Templates take `{context}` and `{format_instruction}` placeholders.

/// System prompt shared by every suggestion kind.
pub const SUGGESTION_SYSTEM: &str = "You are an expert resume writer and career coach.";

/// Experience bullets. Reply is split on line breaks.
pub const EXPERIENCE_PROMPT_TEMPLATE: &str = r#"Generate 3 professional achievement-focused bullet points for a resume experience section.
Context: {context}

Requirements:
- Start with strong action verbs
- Include quantifiable metrics where possible
- Focus on impact and results
- Keep each bullet point concise (1-2 lines)

Return only the 3 bullet points, one per line, without numbering. {format_instruction}"#;

/// Skills list. Reply is split on commas.
pub const SKILLS_PROMPT_TEMPLATE: &str = r#"Generate 8-10 relevant professional skills based on the following context.
Context: {context}

Requirements:
- Mix of technical and soft skills
- Industry-relevant
- Modern and in-demand skills

Return only the skill names, comma-separated. {format_instruction}"#;

/// Professional summaries. Reply is split on `---`.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Generate 3 different professional summary options for a resume.
Context: {context}

Requirements:
- 2-3 sentences each
- Highlight key strengths and experience
- Professional tone
- Action-oriented language

Return only the 3 summaries, separated by '---'. {format_instruction}"#;
