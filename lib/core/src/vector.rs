use serde::{Deserialize, Serialize};

/// A sparse vector of term weights, stored as `(term index, weight)` pairs
/// sorted by term index with no duplicate indices.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f64)>,
}

impl SparseVector {
    /// Build a vector from unordered pairs. Duplicate indices are summed and
    /// zero weights dropped.
    #[must_use]
    pub fn new(mut entries: Vec<(u32, f64)>) -> Self {
        entries.sort_by_key(|(idx, _)| *idx);
        let mut merged: Vec<(u32, f64)> = Vec::with_capacity(entries.len());
        for (idx, weight) in entries {
            match merged.last_mut() {
                Some((last, acc)) if *last == idx => *acc += weight,
                _ => merged.push((idx, weight)),
            }
        }
        merged.retain(|(_, w)| *w != 0.0);
        Self { entries: merged }
    }

    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Number of non-zero components
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    /// Weight at `index`, zero when absent
    pub fn get(&self, index: u32) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(idx, _)| *idx)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product by merging the two sorted index lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ia, wa) = self.entries[i];
            let (ib, wb) = other.entries[j];
            match ia.cmp(&ib) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Compute cosine similarity with another vector.
    ///
    /// Returns 0.0 when either side is the zero vector. Term weights are
    /// non-negative, so the result is clamped into [0, 1] to absorb rounding.
    pub fn cosine_similarity(&self, other: &SparseVector) -> f64 {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        (self.dot(other) / (norm_a * norm_b)).clamp(0.0, 1.0)
    }

    /// Normalize the vector to unit length
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f64::EPSILON {
            let inv_norm = 1.0 / norm;
            for (_, w) in &mut self.entries {
                *w *= inv_norm;
            }
        }
    }

    /// Get normalized copy
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_merges_and_sorts() {
        let v = SparseVector::new(vec![(3, 1.0), (1, 2.0), (3, 0.5), (7, 0.0)]);
        assert_eq!(v.entries(), &[(1, 2.0), (3, 1.5)]);
        assert_eq!(v.get(3), 1.5);
        assert_eq!(v.get(7), 0.0);
    }

    #[test]
    fn test_cosine_similarity() {
        let v1 = SparseVector::new(vec![(0, 1.0)]);
        let v2 = SparseVector::new(vec![(0, 3.0)]);
        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-12);

        let v3 = SparseVector::new(vec![(0, 1.0)]);
        let v4 = SparseVector::new(vec![(1, 1.0)]);
        assert_eq!(v3.cosine_similarity(&v4), 0.0);
    }

    #[test]
    fn test_cosine_with_zero_vector() {
        let v = SparseVector::new(vec![(2, 0.4), (5, 0.9)]);
        assert_eq!(v.cosine_similarity(&SparseVector::zero()), 0.0);
        assert_eq!(SparseVector::zero().cosine_similarity(&v), 0.0);
    }

    #[test]
    fn test_cosine_bounded() {
        let a = SparseVector::new(vec![(0, 0.1), (1, 0.7), (4, 0.3)]);
        let b = SparseVector::new(vec![(1, 0.2), (4, 0.9), (9, 0.05)]);
        let sim = a.cosine_similarity(&b);
        assert!((0.0..=1.0).contains(&sim));
        assert!((a.cosine_similarity(&a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize() {
        let v = SparseVector::new(vec![(0, 3.0), (1, 4.0)]).normalized();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.get(0) - 0.6).abs() < 1e-12);
    }
}
