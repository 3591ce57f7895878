use crate::normalize::{clean_text, collapse_whitespace, parse_duration, parse_stipend};
use internmatch_core::PLACEHOLDER_PROFILE;
use serde::{Deserialize, Serialize};

/// One internship posting after normalization.
///
/// Text fields are never missing (empty string instead), numeric fields are
/// `None` when unknown, and `profile` is never empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Posting {
    pub title: String,
    pub organization: String,
    pub location: String,
    pub requirements: String,
    pub description: String,
    pub mode: String,
    pub duration_weeks: Option<f64>,
    pub stipend_per_month: Option<f64>,
    /// Numbered requirement fields joined in column order
    pub all_requirements: String,
    /// Text fed to the vector index
    pub profile: String,
}

impl Posting {
    /// Lower-cased requirement text searched by the fallback matcher
    pub fn requirement_text(&self) -> String {
        format!("{} {}", self.requirements, self.all_requirements).to_lowercase()
    }
}

/// Raw cell values of one catalog row, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPosting {
    pub title: String,
    pub organization: String,
    pub location: String,
    pub requirements: String,
    pub description: String,
    pub mode: String,
    pub duration_weeks: String,
    pub stipend_per_month: String,
    /// Values of the `req_<n>` columns, in column order
    pub numbered_requirements: Vec<String>,
}

impl RawPosting {
    pub fn normalize(self) -> Posting {
        let title = clean_text(&self.title);
        let organization = clean_text(&self.organization);
        let location = clean_text(&self.location);
        let requirements = clean_text(&self.requirements);
        let description = clean_text(&self.description);

        let all_requirements = collapse_whitespace(&clean_text(&self.numbered_requirements.join(" ")));

        let mut profile = collapse_whitespace(&[
            title.as_str(),
            organization.as_str(),
            requirements.as_str(),
            all_requirements.as_str(),
            description.as_str(),
        ]
        .join(" "));
        if profile.is_empty() {
            profile = PLACEHOLDER_PROFILE.to_string();
        }

        Posting {
            title,
            organization,
            location,
            requirements,
            description,
            mode: self.mode.trim().to_string(),
            duration_weeks: parse_duration(&self.duration_weeks),
            stipend_per_month: parse_stipend(&self.stipend_per_month),
            all_requirements,
            profile,
        }
    }
}
