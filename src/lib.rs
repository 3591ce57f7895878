//! # internmatch
//!
//! Internship recommendation engine. Given a candidate's education, skills
//! and interests plus a few practical preferences, it ranks a catalog of
//! internship postings by TF-IDF cosine similarity, applies fail-open hard
//! filters and a location boost, and falls back to skill-token matching when
//! the best similarity is too weak to trust.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! internmatch serve --catalog internships.csv --port 5000
//! curl -X POST localhost:5000/recommend -d '{"skills": "python, sql"}'
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use internmatch::prelude::*;
//!
//! let recommender = Recommender::from_path("internships.csv", RankingConfig::default()).unwrap();
//! let query = CandidateQuery::new()
//!     .with_skills("Python, SQL")
//!     .with_mode("remote")
//!     .with_top_n(3);
//! for rec in recommender.recommend(&query) {
//!     println!("{} at {} ({:.2})", rec.title, rec.organization, rec.score);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `internmatch-core` - sparse vectors, TF-IDF index, fail-open filters
//! - `internmatch-catalog` - catalog loading and normalization
//! - `internmatch-ranking` - filters, boost, fallback and the `Recommender`
//! - `internmatch-api` - REST API

// Re-export core types
pub use internmatch_core::{
    Error, Result,
    SparseVector, TfIdfIndex, Projection,
    Filter, FilterOutcome,
};

// Re-export catalog
pub use internmatch_catalog::{Catalog, CatalogStats, Posting, RawPosting};

// Re-export ranking
pub use internmatch_ranking::{
    CandidateQuery, FuzzyMetric, RankingConfig, RankingPath, RankingReport,
    RecommendResponse, Recommendation, Recommender,
};

// Re-export API
pub use internmatch_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, Posting,
        CandidateQuery, RankingConfig, Recommendation, Recommender,
        Error, Result,
        RestApi,
    };
}
