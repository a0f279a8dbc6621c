//! Resume payload as the builder client sends it.
//!
//! Every field is optional and unknown fields (ids, links, dates the renderer
//! does not use) are ignored. Absence is a typed state, never an error.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(default)]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationItem>,
    #[serde(default)]
    pub skills: Option<Skills>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<CertificationItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub position: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    /// `None` (or blank) means the role is current.
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: Option<String>,
    pub field: Option<String>,
    pub school: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default, deserialize_with = "null_as_default")]
    pub technical: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationItem {
    pub name: Option<String>,
    pub issuer: Option<String>,
}

impl PersonalInfo {
    pub fn is_empty(&self) -> bool {
        [
            &self.full_name,
            &self.email,
            &self.phone,
            &self.location,
            &self.summary,
        ]
        .iter()
        .all(|field| is_blank(field))
    }
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }
}

impl ResumeData {
    /// True when no section carries any content.
    pub fn is_empty(&self) -> bool {
        self.personal_info.as_ref().map_or(true, PersonalInfo::is_empty)
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.as_ref().map_or(true, Skills::is_empty)
            && self.projects.is_empty()
            && self.certifications.is_empty()
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
