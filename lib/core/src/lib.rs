//! # internmatch Core
//!
//! Core building blocks of the internmatch ranking engine.
//!
//! - [`SparseVector`] - Sparse term-weight vector with cosine similarity
//! - [`TfIdfIndex`] - Term-frequency / inverse-document-frequency space
//! - [`score_all`] - Cosine scoring of a query against every document
//! - [`apply_fail_open`] - Filter combinator that never empties a row set
//!
//! ## Example
//!
//! ```rust
//! use internmatch_core::{TfIdfIndex, score_all};
//!
//! let index = TfIdfIndex::fit(&["rust async networking", "python data science"]);
//! let projection = index.transform("python pandas");
//! let scores = score_all(&index, &projection);
//! assert!(scores[1] > scores[0]);
//! ```

pub mod error;
pub mod filter;
pub mod similarity;
pub mod stopwords;
pub mod tfidf;
pub mod vector;

pub use error::{Error, Result};
pub use filter::{apply_fail_open, Filter, FilterOutcome};
pub use similarity::score_all;
pub use stopwords::{is_stop_word, ENGLISH_STOP_WORDS};
pub use tfidf::{DegradedReason, Projection, TfIdfIndex, PLACEHOLDER_PROFILE};
pub use vector::SparseVector;
