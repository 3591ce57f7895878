//! The ranking service.
//!
//! A [`Recommender`] owns one immutable catalog and a validated config. It is
//! built once at startup and shared by reference (or `Arc`) with every
//! request; ranking keeps all intermediate state local to the call, so
//! concurrent readers need no locking.

use crate::config::RankingConfig;
use crate::fallback::fallback_rank;
use crate::pipeline::{apply_filters, apply_location_boost, filters_for, sort_by_score, ScoredRow};
use crate::query::CandidateQuery;
use crate::result::{RankingPath, RankingReport, Recommendation};
use internmatch_catalog::Catalog;
use internmatch_core::{score_all, Filter, Result};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    config: RankingConfig,
}

impl Recommender {
    pub fn new(catalog: Catalog, config: RankingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Load the catalog at `path` and build the service around it
    pub fn from_path<P: AsRef<Path>>(path: P, config: RankingConfig) -> Result<Self> {
        Self::new(Catalog::load(path)?, config)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Top matches for `query`, best first. Never fails; an empty catalog
    /// gives an empty list.
    pub fn recommend(&self, query: &CandidateQuery) -> Vec<Recommendation> {
        self.rank(query).recommendations
    }

    /// Like [`recommend`](Self::recommend) but also reports how the
    /// ranking was reached
    pub fn rank(&self, query: &CandidateQuery) -> RankingReport {
        let postings = self.catalog.postings();
        let top_n = query.result_count(self.config.default_top_n);

        let projection = self.catalog.index().transform(&query.profile_text());
        let degraded_projection = projection.is_degraded();
        if degraded_projection {
            warn!(?projection, "query projection degraded; similarity scores are zero");
        }
        let base_scores = score_all(self.catalog.index(), &projection);
        let base_rows: Vec<ScoredRow> = base_scores
            .iter()
            .enumerate()
            .map(|(index, &score)| ScoredRow { index, score })
            .collect();

        let mut rows = base_rows.clone();
        let filters = filters_for(query);
        let outcomes = apply_filters(&mut rows, postings, &filters);

        let boosted = match query.location_preference() {
            Some(location) => apply_location_boost(&mut rows, postings, &location, self.config.location_boost),
            None => 0,
        };

        let reverted_to_full_catalog = rows.is_empty() && !base_rows.is_empty();
        if reverted_to_full_catalog {
            rows = base_rows;
        }

        let best_score = rows.iter().map(|r| r.score).fold(f64::NEG_INFINITY, f64::max);
        let mut path = RankingPath::Similarity;
        if !rows.is_empty() && best_score < self.config.weak_match_threshold {
            if let Some(ranked) = fallback_rank(&rows, postings, &query.skills, &self.config) {
                path = RankingPath::Fallback;
                rows = ranked;
            }
        }
        if path == RankingPath::Similarity {
            sort_by_score(&mut rows);
        }
        let candidates_count = rows.len();
        rows.truncate(top_n);

        debug!(
            ?path,
            candidates = candidates_count,
            best_score,
            boosted,
            returned = rows.len(),
            "ranking complete"
        );

        RankingReport {
            path,
            candidates_count,
            best_score: if best_score.is_finite() { best_score } else { 0.0 },
            filters: filters.iter().map(|f| f.name()).zip(outcomes).collect(),
            boosted,
            reverted_to_full_catalog,
            degraded_projection,
            recommendations: rows
                .iter()
                .map(|row| Recommendation::from_row(&postings[row.index], row))
                .collect(),
        }
    }
}
