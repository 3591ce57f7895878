//! Hard filters and the soft location boost.
//!
//! Filters run in a fixed order on the current row set and each one is
//! fail-open: a filter that would drop every remaining row is skipped.

use crate::query::CandidateQuery;
use internmatch_catalog::Posting;
use internmatch_core::{apply_fail_open, Filter, FilterOutcome};

/// A catalog row and its current score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRow {
    /// Position of the posting in the catalog
    pub index: usize,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostingFilter {
    /// Mode contains this lower-cased text
    ModeContains(String),
    /// Stipend at least this much; unknown stipend counts as 0
    MinStipend(f64),
    /// Duration at most this many weeks; unknown duration counts as infinite
    MaxDuration(f64),
}

impl Filter<Posting> for PostingFilter {
    fn matches(&self, posting: &Posting) -> bool {
        match self {
            PostingFilter::ModeContains(mode) => posting.mode.to_lowercase().contains(mode.as_str()),
            PostingFilter::MinStipend(min) => posting.stipend_per_month.unwrap_or(0.0) >= *min,
            PostingFilter::MaxDuration(max) => posting.duration_weeks.unwrap_or(f64::INFINITY) <= *max,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PostingFilter::ModeContains(_) => "mode",
            PostingFilter::MinStipend(_) => "min_stipend",
            PostingFilter::MaxDuration(_) => "max_duration_weeks",
        }
    }
}

/// Filters requested by `query`, in application order
pub fn filters_for(query: &CandidateQuery) -> Vec<PostingFilter> {
    let mut filters = Vec::new();
    if let Some(mode) = query.mode_preference() {
        filters.push(PostingFilter::ModeContains(mode));
    }
    if let Some(min) = query.min_stipend {
        filters.push(PostingFilter::MinStipend(min));
    }
    if let Some(max) = query.max_duration_weeks {
        filters.push(PostingFilter::MaxDuration(max));
    }
    filters
}

/// Apply `filters` one after another, each fail-open
pub fn apply_filters(
    rows: &mut Vec<ScoredRow>,
    postings: &[Posting],
    filters: &[PostingFilter],
) -> Vec<FilterOutcome> {
    filters
        .iter()
        .map(|filter| apply_fail_open(rows, filter.name(), |row| filter.matches(&postings[row.index])))
        .collect()
}

/// Add `boost` to every row whose location contains `preference`
/// (lower-cased). Returns how many rows were boosted.
pub fn apply_location_boost(
    rows: &mut [ScoredRow],
    postings: &[Posting],
    preference: &str,
    boost: f64,
) -> usize {
    let mut boosted = 0;
    for row in rows.iter_mut() {
        if postings[row.index].location.to_lowercase().contains(preference) {
            row.score += boost;
            boosted += 1;
        }
    }
    boosted
}

/// Sort by score descending; equal scores keep their current order
pub fn sort_by_score(rows: &mut [ScoredRow]) {
    rows.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
}
