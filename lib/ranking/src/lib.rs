//! # internmatch Ranking
//!
//! Turns a candidate profile into a short list of internship postings.
//!
//! ## Pipeline
//!
//! ```text
//! profile ──> TF-IDF projection ──> cosine score (every posting)
//!                                        │
//!                              fail-open filters
//!                     (mode, min stipend, max duration)
//!                                        │
//!                               location boost
//!                                        │
//!                     empty? ──> revert to full catalog
//!                                        │
//!                   best < threshold? ──> skill-token fallback
//!                                        │
//!                          top N, rounded, serialized
//! ```
//!
//! ## Example
//!
//! ```rust
//! use internmatch_catalog::{Catalog, RawPosting};
//! use internmatch_ranking::{CandidateQuery, RankingConfig, Recommender};
//!
//! let catalog = Catalog::from_raw(vec![
//!     RawPosting {
//!         title: "Data Analyst Intern".to_string(),
//!         requirements: "Python, SQL".to_string(),
//!         ..Default::default()
//!     },
//!     RawPosting {
//!         title: "Graphic Designer Intern".to_string(),
//!         requirements: "Photoshop".to_string(),
//!         ..Default::default()
//!     },
//! ]);
//! let recommender = Recommender::new(catalog, RankingConfig::default()).unwrap();
//!
//! let query = CandidateQuery::new().with_skills("python, sql").with_top_n(1);
//! let results = recommender.recommend(&query);
//! assert_eq!(results[0].title, "Data Analyst Intern");
//! ```

pub mod config;
pub mod fallback;
pub mod fuzzy;
pub mod pipeline;
pub mod query;
pub mod recommender;
pub mod result;

pub use config::{FuzzyMetric, RankingConfig};
pub use fallback::{fallback_rank, skill_tokens, token_credit};
pub use fuzzy::{fuzzy_ratio, sequence_ratio};
pub use pipeline::{apply_filters, apply_location_boost, filters_for, sort_by_score, PostingFilter, ScoredRow};
pub use query::CandidateQuery;
pub use recommender::Recommender;
pub use result::{RankingPath, RankingReport, RecommendResponse, Recommendation};
