// TF-IDF vector space fitted once over the catalog profiles
use crate::stopwords::is_stop_word;
use crate::vector::SparseVector;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::warn;

/// Stand-in text for blank profiles and blank queries
pub const PLACEHOLDER_PROFILE: &str = "empty";

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Why a query could not be projected into the vector space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradedReason {
    /// The fitted vocabulary has no terms at all
    EmptyVocabulary,
}

/// Outcome of projecting a query string into the fitted space
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Vector(SparseVector),
    Degraded(DegradedReason),
}

impl Projection {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Projection::Degraded(_))
    }
}

#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    // term -> column index (columns ordered alphabetically)
    vocabulary: AHashMap<String, u32>,
    // column index -> smoothed idf
    idf: Vec<f64>,
    // one L2-normalized vector per fitted document, in input order
    documents: Vec<SparseVector>,
}

impl TfIdfIndex {
    /// Lower-case, extract runs of 2+ word characters, drop stop words
    pub fn tokenize(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !is_stop_word(t))
            .map(str::to_string)
            .collect()
    }

    /// Fit the vocabulary and idf weights over `documents` and vectorize each.
    ///
    /// Blank documents are replaced with [`PLACEHOLDER_PROFILE`]. A corpus
    /// without a single usable term yields an index with an empty vocabulary
    /// whose projections are all degraded.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| Self::tokenize(non_blank(d.as_ref())))
            .collect();

        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: AHashMap<String, u32> = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx as u32))
            .collect();

        let mut document_frequency = vec![0u32; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<u32> = tokens.iter().map(|t| vocabulary[t.as_str()]).collect();
            for idx in unique {
                document_frequency[idx as usize] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut index = Self {
            vocabulary,
            idf,
            documents: Vec::with_capacity(tokenized.len()),
        };
        index.documents = tokenized.iter().map(|tokens| index.weigh(tokens)).collect();

        if index.vocabulary.is_empty() && !documents.is_empty() {
            warn!(documents = documents.len(), "fitted vocabulary is empty; all scores will be zero");
        }
        index
    }

    /// Project arbitrary text into the fitted space. Unknown terms are ignored.
    pub fn transform(&self, query: &str) -> Projection {
        if self.vocabulary.is_empty() {
            return Projection::Degraded(DegradedReason::EmptyVocabulary);
        }
        Projection::Vector(self.weigh(&Self::tokenize(non_blank(query))))
    }

    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let mut counts: AHashMap<u32, f64> = AHashMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        SparseVector::new(
            counts
                .into_iter()
                .map(|(idx, tf)| (idx, tf * self.idf[idx as usize]))
                .collect(),
        )
        .normalized()
    }

    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column index of `term`, if it survived fitting
    pub fn term_index(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|idx| self.idf[idx as usize])
    }

    #[inline]
    pub fn documents(&self) -> &[SparseVector] {
        &self.documents
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn non_blank(text: &str) -> &str {
    if text.trim().is_empty() {
        PLACEHOLDER_PROFILE
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_stop_words_and_short_tokens() {
        let tokens = TfIdfIndex::tokenize("The Python developer, a C++ & SQL fan");
        assert_eq!(tokens, vec!["python", "developer", "sql", "fan"]);
    }

    #[test]
    fn test_idf_is_smoothed() {
        let index = TfIdfIndex::fit(&["python sql", "python java"]);
        // df(python) = 2, n = 2 -> ln(3/3) + 1
        assert!((index.idf("python").unwrap() - 1.0).abs() < 1e-12);
        // df(sql) = 1 -> ln(3/2) + 1
        assert!((index.idf("sql").unwrap() - ((1.5f64).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_vocabulary_is_alphabetical() {
        let index = TfIdfIndex::fit(&["zebra apple mango"]);
        assert_eq!(index.term_index("apple"), Some(0));
        assert_eq!(index.term_index("mango"), Some(1));
        assert_eq!(index.term_index("zebra"), Some(2));
    }

    #[test]
    fn test_documents_are_unit_length() {
        let index = TfIdfIndex::fit(&["rust tokio async", "python pandas", ""]);
        assert!((index.documents()[0].norm() - 1.0).abs() < 1e-9);
        assert!((index.documents()[1].norm() - 1.0).abs() < 1e-9);
        // placeholder-only document is the zero vector
        assert!(index.documents()[2].is_zero());
    }

    #[test]
    fn test_transform_ignores_unknown_terms() {
        let index = TfIdfIndex::fit(&["rust tokio", "python pandas"]);
        match index.transform("rust haskell") {
            Projection::Vector(v) => {
                assert_eq!(v.nnz(), 1);
                assert!(v.get(index.term_index("rust").unwrap()) > 0.0);
            }
            other => panic!("unexpected projection {:?}", other),
        }
    }

    #[test]
    fn test_blank_query_uses_placeholder() {
        let index = TfIdfIndex::fit(&["rust tokio"]);
        assert_eq!(index.transform("   "), Projection::Vector(SparseVector::zero()));
    }

    #[test]
    fn test_cloned_index_projects_identically() {
        let index = TfIdfIndex::fit(&["rust tokio", "python pandas"]);
        let copy = index.clone();
        assert_eq!(copy.vocabulary_size(), index.vocabulary_size());
        assert_eq!(copy.transform("tokio rust"), index.transform("tokio rust"));
    }

    #[test]
    fn test_empty_vocabulary_degrades() {
        let index = TfIdfIndex::fit(&["", "the and of"]);
        assert_eq!(index.vocabulary_size(), 0);
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.transform("python"),
            Projection::Degraded(DegradedReason::EmptyVocabulary)
        );
    }
}
