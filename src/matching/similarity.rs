//! String similarity used as the fallback signal of the match cascade.
//!
//! The engine only depends on the [`SimilarityScorer`] trait; the default
//! [`EditDistanceScorer`] is built on normalized Levenshtein distance from
//! `strsim`.

use std::collections::BTreeSet;
use thiserror::Error;

use crate::core::query::char_len;

/// Scale applied to token-reordered comparisons so they never beat an equally
/// good plain comparison
const TOKEN_SCALE: f64 = 0.95;

/// Length ratio at which [`EditDistanceScorer::weighted_ratio`] switches to
/// partial (substring window) comparison
const PARTIAL_LENGTH_RATIO: f64 = 1.5;

/// Length ratio above which partial comparisons are discounted further
const LONG_PARTIAL_LENGTH_RATIO: f64 = 8.0;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("Similarity scoring failed: {0}")]
    Failed(String),
}

/// A corpus entry returned by [`SimilarityScorer::top_matches`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusMatch {
    /// Index into the corpus slice that was searched
    pub index: usize,
    /// Similarity in [0, 100]
    pub score: f64,
}

/// Narrow similarity capability consumed by the matcher.
///
/// All scores are in [0, 100]. Errors are passed through to the caller of
/// the search, never turned into an empty result.
pub trait SimilarityScorer: Send + Sync {
    /// Plain similarity of two strings
    fn ratio(&self, a: &str, b: &str) -> Result<f64, ScorerError>;

    /// Similarity tolerant of word order and length differences, used for
    /// whole-corpus searches. Defaults to [`SimilarityScorer::ratio`].
    fn weighted_ratio(&self, a: &str, b: &str) -> Result<f64, ScorerError> {
        self.ratio(a, b)
    }

    /// Best `limit` corpus entries scoring at least `cutoff` against `query`.
    ///
    /// Ordered by descending score; equal scores are ordered by the corpus
    /// string, then by index, so the result never depends on hash order.
    fn top_matches(
        &self,
        query: &str,
        corpus: &[&str],
        limit: usize,
        cutoff: f64,
    ) -> Result<Vec<CorpusMatch>, ScorerError> {
        let mut matches = Vec::new();
        for (index, name) in corpus.iter().enumerate() {
            let score = self.weighted_ratio(query, name)?;
            if score >= cutoff {
                matches.push(CorpusMatch { index, score });
            }
        }

        matches.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| corpus[a.index].cmp(corpus[b.index]))
                .then_with(|| a.index.cmp(&b.index))
        });
        matches.truncate(limit);
        Ok(matches)
    }
}

/// Default scorer based on normalized Levenshtein distance
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistanceScorer;

impl SimilarityScorer for EditDistanceScorer {
    fn ratio(&self, a: &str, b: &str) -> Result<f64, ScorerError> {
        Ok(ratio(a, b))
    }

    fn weighted_ratio(&self, a: &str, b: &str) -> Result<f64, ScorerError> {
        Ok(weighted_ratio(a, b))
    }
}

/// Normalized Levenshtein similarity scaled to [0, 100]
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Best of plain, token-reordered and partial comparisons.
///
/// Comparable strings of similar length are compared whole and as sorted or
/// set-reduced token lists. When one string is much longer, the shorter one
/// is compared against every equally long window of the longer one instead,
/// at a discount.
#[must_use]
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (len_a, len_b) = (char_len(a), char_len(b));
    let (shorter, longer, min_len, max_len) = if len_a <= len_b {
        (a, b, len_a, len_b)
    } else {
        (b, a, len_b, len_a)
    };

    #[allow(clippy::cast_precision_loss)]
    let len_ratio = max_len as f64 / min_len as f64;
    let base = ratio(a, b);

    if len_ratio < PARTIAL_LENGTH_RATIO {
        let sorted = token_sort_ratio(a, b) * TOKEN_SCALE;
        let set = token_set_ratio(a, b) * TOKEN_SCALE;
        return base.max(sorted).max(set);
    }

    let partial_scale = if len_ratio < LONG_PARTIAL_LENGTH_RATIO {
        0.9
    } else {
        0.6
    };
    let partial = partial_ratio(shorter, longer) * partial_scale;
    let partial_sorted = partial_ratio(&sorted_tokens(shorter), &sorted_tokens(longer))
        * TOKEN_SCALE
        * partial_scale;

    base.max(partial).max(partial_sorted)
}

/// Best [`ratio`] of `shorter` against any window of `longer` with the same
/// character length
fn partial_ratio(shorter: &str, longer: &str) -> f64 {
    let short_len = char_len(shorter);
    let long_chars: Vec<char> = longer.chars().collect();
    if short_len == 0 {
        return 0.0;
    }
    if short_len >= long_chars.len() {
        return ratio(shorter, longer);
    }

    let mut best = 0.0f64;
    for window in long_chars.windows(short_len) {
        let candidate: String = window.iter().collect();
        best = best.max(ratio(shorter, &candidate));
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let shared: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    // One side's words are a subset of the other's
    if !shared.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100.0;
    }

    let shared = shared.join(" ");
    let join = |rest: &[&str]| -> String {
        let rest = rest.join(" ");
        match (shared.is_empty(), rest.is_empty()) {
            (true, _) => rest,
            (false, true) => shared.clone(),
            (false, false) => format!("{shared} {rest}"),
        }
    };
    let combined_a = join(&only_a);
    let combined_b = join(&only_b);

    ratio(&shared, &combined_a)
        .max(ratio(&shared, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_bounds() {
        assert!((ratio("john", "john") - 100.0).abs() < f64::EPSILON);
        assert!(ratio("abc", "xyz").abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratio_single_typo() {
        let score = ratio("jon smith", "john smith");
        assert!((score - 90.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_weighted_ratio_word_order() {
        assert!((weighted_ratio("smith john", "john smith") - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_ratio_partial() {
        // "smith" is a window of the longer string; length ratio 2.0
        let score = weighted_ratio("smith", "john smith");
        assert!((score - 90.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_weighted_ratio_empty() {
        assert!(weighted_ratio("", "john").abs() < f64::EPSILON);
        assert!(weighted_ratio("john", "").abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_ratio_never_exceeds_100() {
        for (a, b) in [("a", "a"), ("ab ba", "ba ab"), ("x", "xxxxxxxxxxxxxxxx")] {
            let score = weighted_ratio(a, b);
            assert!((0.0..=100.0).contains(&score), "{a} / {b}: {score}");
        }
    }

    #[test]
    fn test_top_matches_orders_and_truncates() {
        let corpus = ["john smith", "jane smyth", "xavier q", "jon smith"];
        let matches = EditDistanceScorer
            .top_matches("john smith", &corpus, 2, 40.0)
            .unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[1].index, 3);
        assert!(matches[0].score >= matches[1].score);
    }

    #[test]
    fn test_top_matches_applies_cutoff() {
        let corpus = ["john smith", "xavier q"];
        let matches = EditDistanceScorer
            .top_matches("john smith", &corpus, 10, 99.0)
            .unwrap();
        assert_eq!(matches, vec![CorpusMatch { index: 0, score: 100.0 }]);
    }

    #[test]
    fn test_top_matches_breaks_ties_by_name() {
        let corpus = ["bob", "bab", "bcb"];
        let matches = EditDistanceScorer.top_matches("bzb", &corpus, 10, 0.0).unwrap();
        let order: Vec<usize> = matches.iter().map(|m| m.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    struct FailingScorer;

    impl SimilarityScorer for FailingScorer {
        fn ratio(&self, _a: &str, _b: &str) -> Result<f64, ScorerError> {
            Err(ScorerError::Failed("out of memory".to_string()))
        }
    }

    #[test]
    fn test_top_matches_propagates_errors() {
        let result = FailingScorer.top_matches("john", &["john"], 10, 0.0);
        assert!(matches!(result, Err(ScorerError::Failed(_))));
    }
}
