//! Cosine scoring of a projected query against every fitted document.

use crate::tfidf::{Projection, TfIdfIndex};

/// Score `projection` against every document of `index`, in document order.
///
/// Every score lies in [0, 1]. A degraded projection yields all zeros so
/// ranking falls back to catalog order instead of failing.
pub fn score_all(index: &TfIdfIndex, projection: &Projection) -> Vec<f64> {
    match projection {
        Projection::Vector(query) => index
            .documents()
            .iter()
            .map(|doc| query.cosine_similarity(doc))
            .collect(),
        Projection::Degraded(_) => vec![0.0; index.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfidf::DegradedReason;

    #[test]
    fn test_scores_align_with_documents() {
        let index = TfIdfIndex::fit(&["rust tokio async", "python pandas numpy", "rust python"]);
        let scores = score_all(&index, &index.transform("rust tokio"));
        assert_eq!(scores.len(), 3);
        assert!(scores[0] > scores[2]);
        assert_eq!(scores[1], 0.0);
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn test_degraded_projection_scores_zero() {
        let index = TfIdfIndex::fit(&["rust", "python"]);
        let scores = score_all(&index, &Projection::Degraded(DegradedReason::EmptyVocabulary));
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_identical_text_scores_one() {
        let index = TfIdfIndex::fit(&["data analyst excel dashboards"]);
        let scores = score_all(&index, &index.transform("data analyst excel dashboards"));
        assert!((scores[0] - 1.0).abs() < 1e-9);
    }
}
