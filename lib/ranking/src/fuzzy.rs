//! Approximate string similarity for the fallback matcher.
//!
//! All functions return a ratio in [0.0, 1.0] where 1.0 means identical.

use crate::config::FuzzyMetric;
use std::collections::HashMap;

/// Texts at least this long drop their most frequent characters as anchors
const AUTOJUNK_MIN_LEN: usize = 200;

pub fn fuzzy_ratio(metric: FuzzyMetric, a: &str, b: &str) -> f64 {
    match metric {
        FuzzyMetric::Sequence => sequence_ratio(a, b),
        FuzzyMetric::JaroWinkler => strsim::jaro_winkler(a, b),
        FuzzyMetric::NormalizedLevenshtein => strsim::normalized_levenshtein(a, b),
    }
}

/// Ratcliff/Obershelp ratio `2·M / (|a| + |b|)`, where `M` is the number of
/// characters in the matching blocks found by repeatedly taking the longest
/// common run and recursing on both sides of it.
///
/// When `b` has 200 or more characters, characters occurring in it more than
/// `1 + len/100` times are not used to start a match (they can still extend
/// one). Two empty strings are identical.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matcher = SequenceMatcher::new(&a, &b);
    2.0 * matcher.matched_len() as f64 / total as f64
}

struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    // char -> ascending positions in b
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }
        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }
        Self { a, b, b2j }
    }

    /// Longest matching run inside `a[alo..ahi]` and `b[blo..bhi]` as
    /// `(i, j, size)`; earliest in `a`, then in `b`, on ties.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        let mut run_ending_at: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = if j > 0 {
                        run_ending_at.get(&(j - 1)).copied().unwrap_or(0)
                    } else {
                        0
                    };
                    let k = prev + 1;
                    next.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            run_ending_at = next;
        }

        // grow over characters excluded as anchors
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }

    fn matched_len(&self) -> usize {
        let mut total = 0;
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, k) = self.longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_and_disjoint() {
        assert_eq!(sequence_ratio("python", "python"), 1.0);
        assert_eq!(sequence_ratio("abc", "xyz"), 0.0);
        assert_eq!(sequence_ratio("", ""), 1.0);
        assert_eq!(sequence_ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // "bcd" matches: 2 * 3 / 8
        assert!((sequence_ratio("abcd", "bcde") - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_blocks_on_both_sides() {
        // "ab" and "de" both match around the differing middle: 2 * 4 / 10
        assert!((sequence_ratio("abxde", "abyde") - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_popular_characters_do_not_anchor() {
        let long = format!("xyz{}", "a".repeat(300));
        assert_eq!(sequence_ratio("aaa", &long), 0.0);
    }

    #[test]
    fn test_popular_characters_extend_a_match() {
        let long = format!("x{}", "a".repeat(300));
        let expected = 2.0 * 3.0 / (3.0 + 301.0);
        assert!((sequence_ratio("xaa", &long) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_short_text_keeps_all_anchors() {
        let text = "a".repeat(50);
        assert!((sequence_ratio("aaa", &text) - 6.0 / 53.0).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_dispatch() {
        assert_eq!(fuzzy_ratio(FuzzyMetric::JaroWinkler, "sql", "sql"), 1.0);
        assert_eq!(fuzzy_ratio(FuzzyMetric::NormalizedLevenshtein, "sql", "sql"), 1.0);
        let r = fuzzy_ratio(FuzzyMetric::NormalizedLevenshtein, "pyhton", "python");
        assert!(r > 0.5 && r < 1.0);
    }
}
