//! Candidate query decoding.
//!
//! Requests come from loosely typed clients, so every field is decoded
//! leniently: text that is missing or not a string becomes empty, numbers
//! that cannot be read become "no filter".

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One recommendation request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CandidateQuery {
    #[serde(deserialize_with = "lenient_text")]
    pub education: String,
    #[serde(deserialize_with = "lenient_text")]
    pub skills: String,
    #[serde(deserialize_with = "lenient_text")]
    pub interests: String,
    #[serde(deserialize_with = "lenient_text")]
    pub preferred_location: String,
    #[serde(deserialize_with = "lenient_text")]
    pub mode: String,
    #[serde(deserialize_with = "lenient_number")]
    pub min_stipend: Option<f64>,
    /// Accepted for wire compatibility; ranking never reads it
    #[serde(deserialize_with = "lenient_number")]
    pub max_stipend: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub max_duration_weeks: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub top_n: Option<usize>,
}

impl CandidateQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = education.into();
        self
    }

    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = skills.into();
        self
    }

    pub fn with_interests(mut self, interests: impl Into<String>) -> Self {
        self.interests = interests.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.preferred_location = location.into();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_min_stipend(mut self, min: f64) -> Self {
        self.min_stipend = Some(min);
        self
    }

    pub fn with_max_stipend(mut self, max: f64) -> Self {
        self.max_stipend = Some(max);
        self
    }

    pub fn with_max_duration(mut self, weeks: f64) -> Self {
        self.max_duration_weeks = Some(weeks);
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Education, skills and interests joined into one query string
    pub fn profile_text(&self) -> String {
        [self.education.as_str(), self.skills.as_str(), self.interests.as_str()]
            .join(" ")
            .trim()
            .to_string()
    }

    /// Lower-cased mode preference, `None` when blank
    pub fn mode_preference(&self) -> Option<String> {
        preference(&self.mode)
    }

    /// Lower-cased location preference, `None` when blank
    pub fn location_preference(&self) -> Option<String> {
        preference(&self.preferred_location)
    }

    /// Requested count, or `default` when absent or zero
    pub fn result_count(&self, default: usize) -> usize {
        self.top_n.filter(|n| *n > 0).unwrap_or(default)
    }
}

fn preference(raw: &str) -> Option<String> {
    let value = raw.trim().to_lowercase();
    (!value.is_empty()).then_some(value)
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
                .map(|v| v as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(value.map(|v| v as usize))
}
