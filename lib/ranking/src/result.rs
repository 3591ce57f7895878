//! Output records of a ranking pass.

use crate::pipeline::ScoredRow;
use internmatch_catalog::Posting;
use internmatch_core::FilterOutcome;
use serde::{Deserialize, Serialize};

/// One recommended posting as returned to callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub organization: String,
    pub location: String,
    pub mode: String,
    /// Whole weeks, `null` when unknown
    pub duration_weeks: Option<i64>,
    /// Whole amount per month, `null` when unknown
    pub stipend_per_month: Option<i64>,
    pub description: String,
    pub requirements: String,
    /// Rounded to 2 decimal places
    pub score: f64,
}

impl Recommendation {
    pub fn from_row(posting: &Posting, row: &ScoredRow) -> Self {
        Self {
            title: posting.title.clone(),
            organization: posting.organization.clone(),
            location: posting.location.clone(),
            mode: posting.mode.clone(),
            duration_weeks: posting.duration_weeks.map(|v| v.trunc() as i64),
            stipend_per_month: posting.stipend_per_month.map(|v| v.trunc() as i64),
            description: posting.description.clone(),
            requirements: posting.requirements.clone(),
            score: round2(row.score),
        }
    }
}

/// Two-decimal rounding; exact halves go away from zero, not to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Which ranking produced the results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RankingPath {
    /// TF-IDF cosine similarity, after filters and boost
    Similarity,
    /// Skill-token overlap, because the best similarity was weak
    Fallback,
}

/// Full account of one ranking pass
#[derive(Debug, Clone)]
pub struct RankingReport {
    pub path: RankingPath,
    /// Rows left after filtering (and the empty-set safeguard)
    pub candidates_count: usize,
    /// Best similarity score among those rows, boost included
    pub best_score: f64,
    /// Outcome of every requested filter, in application order
    pub filters: Vec<(&'static str, FilterOutcome)>,
    /// Rows that received the location boost
    pub boosted: usize,
    /// Filters left nothing and the full catalog was used instead
    pub reverted_to_full_catalog: bool,
    /// The query could not be projected; similarity scores are all zero
    pub degraded_projection: bool,
    pub recommendations: Vec<Recommendation>,
}

/// Response body of the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

impl RecommendResponse {
    pub fn new(recommendations: Vec<Recommendation>) -> Self {
        Self { recommendations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use internmatch_catalog::RawPosting;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.123456), 0.12);
        assert_eq!(round2(0.456), 0.46);
        assert_eq!(round2(2.0), 2.0);
        // 0.125 is exact in binary, so this is a true half
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn test_from_row_converts_numbers() {
        let posting = RawPosting {
            title: "Intern".to_string(),
            duration_weeks: "12.9".to_string(),
            stipend_per_month: "15,000".to_string(),
            ..Default::default()
        }
        .normalize();
        let rec = Recommendation::from_row(&posting, &ScoredRow { index: 0, score: 0.3333 });
        assert_eq!(rec.duration_weeks, Some(12));
        assert_eq!(rec.stipend_per_month, Some(15000));
        assert_eq!(rec.score, 0.33);
    }

    #[test]
    fn test_unknown_numbers_serialize_as_null() {
        let posting = RawPosting { title: "Intern".to_string(), ..Default::default() }.normalize();
        let rec = Recommendation::from_row(&posting, &ScoredRow { index: 0, score: 0.0 });
        let json = serde_json::to_value(RecommendResponse::new(vec![rec])).unwrap();
        assert!(json["recommendations"][0]["duration_weeks"].is_null());
        assert!(json["recommendations"][0]["stipend_per_month"].is_null());
        assert_eq!(json["recommendations"][0]["title"], "Intern");
    }
}
