use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The resume section a suggestion request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Experience,
    Skills,
    Summary,
}

#[derive(Debug, Error, PartialEq)]
#[error("Invalid suggestion type: '{0}' (expected experience, skills or summary)")]
pub struct InvalidSuggestionKind(pub String);

impl SuggestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::Experience => "experience",
            SuggestionKind::Skills => "skills",
            SuggestionKind::Summary => "summary",
        }
    }
}

impl FromStr for SuggestionKind {
    type Err = InvalidSuggestionKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "experience" => Ok(SuggestionKind::Experience),
            "skills" => Ok(SuggestionKind::Skills),
            "summary" => Ok(SuggestionKind::Summary),
            other => Err(InvalidSuggestionKind(other.to_string())),
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
