//! Resume Text Renderer — flattens a structured resume into the plain-text block
//! the ATS prompt embeds.
//!
//! Section order is fixed: personal info, work experience, education, skills,
//! projects, certifications. The model reads the resume top to bottom, so
//! reordering changes analysis behaviour even when the content is identical.

use crate::models::resume::{is_blank, ResumeData};

/// Renders `resume` as newline-joined text. Pure and total: empty sections are
/// omitted and missing fields render as empty strings.
pub fn render_resume_text(resume: &ResumeData) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(personal) = resume.personal_info.as_ref().filter(|p| !p.is_empty()) {
        lines.push(format!("Name: {}", text(&personal.full_name)));
        lines.push(format!("Email: {}", text(&personal.email)));
        lines.push(format!("Phone: {}", text(&personal.phone)));
        lines.push(format!("Location: {}", text(&personal.location)));
        if !is_blank(&personal.summary) {
            lines.push(format!("\nSummary: {}", text(&personal.summary)));
        }
    }

    if !resume.experience.is_empty() {
        lines.push("\nWORK EXPERIENCE:".to_string());
        for exp in &resume.experience {
            let end = if is_blank(&exp.end_date) {
                "Present"
            } else {
                text(&exp.end_date)
            };
            lines.push(format!("{} at {}", text(&exp.position), text(&exp.company)));
            lines.push(format!("{} - {}", text(&exp.start_date), end));
            lines.push(text(&exp.description).to_string());
        }
    }

    if !resume.education.is_empty() {
        lines.push("\nEDUCATION:".to_string());
        for edu in &resume.education {
            lines.push(format!("{} in {}", text(&edu.degree), text(&edu.field)));
            lines.push(text(&edu.school).to_string());
        }
    }

    if let Some(skills) = resume.skills.as_ref().filter(|s| !s.is_empty()) {
        lines.push("\nSKILLS:".to_string());
        if !skills.technical.is_empty() {
            lines.push(format!("Technical: {}", skills.technical.join(", ")));
        }
        if !skills.soft.is_empty() {
            lines.push(format!("Soft Skills: {}", skills.soft.join(", ")));
        }
    }

    if !resume.projects.is_empty() {
        lines.push("\nPROJECTS:".to_string());
        for project in &resume.projects {
            lines.push(format!(
                "{}: {}",
                text(&project.name),
                text(&project.description)
            ));
        }
    }

    if !resume.certifications.is_empty() {
        lines.push("\nCERTIFICATIONS:".to_string());
        for cert in &resume.certifications {
            lines.push(format!("{} - {}", text(&cert.name), text(&cert.issuer)));
        }
    }

    lines.join("\n")
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
