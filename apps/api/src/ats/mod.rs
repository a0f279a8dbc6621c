// ATS analysis: render resume → one model call → schema parse with fixed fallback.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
