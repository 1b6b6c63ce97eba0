use thiserror::Error;

use crate::core::query::{char_len, normalize_query};
use crate::core::types::{Candidate, Tier};
use crate::directory::snapshot::{DirectoryEntry, DirectorySnapshot};
use crate::matching::resolver::DisplayNames;
use crate::matching::similarity::{EditDistanceScorer, ScorerError, SimilarityScorer};
use crate::matching::words::word_match_score;

/// Default maximum number of display names returned
pub const DEFAULT_LIMIT: usize = 10;

/// Default minimum similarity for the fuzzy tier
pub const DEFAULT_CUTOFF: f64 = 40.0;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Query is empty")]
    InvalidInput,

    #[error("No directory has been loaded yet")]
    DirectoryUnavailable,

    #[error(transparent)]
    Scorer(#[from] ScorerError),
}

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Limit used when the caller does not pass one
    pub default_limit: usize,
    /// Fuzzy cutoff used when the caller does not pass one
    pub default_cutoff: f64,
    /// Queries shorter than this (in characters) only get exact and prefix matches
    pub short_query_len: usize,
    /// Word score a name must exceed to enter the word-score tier
    pub min_word_score: f64,
    /// Cap on the word score added to the word-score tier's base of 80
    pub max_word_bonus: f64,
    /// Fuzzy score that keeps a candidate sharing no query word
    pub fuzzy_keep_score: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            default_cutoff: DEFAULT_CUTOFF,
            short_query_len: 3,
            min_word_score: 5.0,
            max_word_bonus: 10.0,
            fuzzy_keep_score: 75.0,
        }
    }
}

/// Base score of the word-score tier
const WORD_TIER_BASE: f64 = 80.0;

/// The tiered matching engine.
///
/// Borrows one snapshot for its whole lifetime, so every candidate of a
/// search refers to that snapshot.
pub struct MatchingEngine<'a, S = EditDistanceScorer> {
    snapshot: &'a DirectorySnapshot,
    scorer: S,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with the default scorer and configuration
    pub fn new(snapshot: &'a DirectorySnapshot) -> Self {
        Self::with_config(snapshot, MatchingConfig::default())
    }

    /// Create a new matching engine with the default scorer
    pub fn with_config(snapshot: &'a DirectorySnapshot, config: MatchingConfig) -> Self {
        Self::with_scorer(snapshot, EditDistanceScorer, config)
    }
}

impl<'a, S: SimilarityScorer> MatchingEngine<'a, S> {
    /// Create a new matching engine with a custom similarity scorer
    pub fn with_scorer(snapshot: &'a DirectorySnapshot, scorer: S, config: MatchingConfig) -> Self {
        Self {
            snapshot,
            scorer,
            config,
        }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Resolve a raw query into at most `limit` display names.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidInput`] if the query is blank, or
    /// [`SearchError::Scorer`] if the similarity scorer fails.
    pub fn search(
        &self,
        query: &str,
        limit: usize,
        cutoff: f64,
    ) -> Result<Vec<String>, SearchError> {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Err(SearchError::InvalidInput);
        }
        if limit == 0 {
            return Ok(Vec::new());
        }

        let candidates = self.rank(&normalized, limit, cutoff)?;
        tracing::debug!(
            "Query {:?}: {} candidates from directory v{}",
            normalized,
            candidates.len(),
            self.snapshot.version()
        );

        Ok(DisplayNames::new(self.snapshot, candidates)
            .take(limit)
            .map(str::to_string)
            .collect())
    }

    /// [`MatchingEngine::search`] with the configured default limit and cutoff
    pub fn search_default(&self, query: &str) -> Result<Vec<String>, SearchError> {
        self.search(query, self.config.default_limit, self.config.default_cutoff)
    }

    /// Ordered candidates for a raw query, before display expansion
    pub fn find_candidates(
        &self,
        query: &str,
        limit: usize,
        cutoff: f64,
    ) -> Result<Vec<Candidate<'a>>, SearchError> {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Err(SearchError::InvalidInput);
        }
        self.rank(&normalized, limit, cutoff)
    }

    fn rank(
        &self,
        query: &str,
        limit: usize,
        cutoff: f64,
    ) -> Result<Vec<Candidate<'a>>, SearchError> {
        if char_len(query) < self.config.short_query_len {
            return Ok(self.rank_short(query));
        }

        // Single-character words carry too little signal to require or credit
        let query_words: Vec<&str> = query
            .split_whitespace()
            .filter(|w| char_len(w) > 1)
            .collect();

        let mut leading = Vec::new();
        let mut contained = Vec::new();
        let mut worded = Vec::new();
        let mut claimed = vec![false; self.snapshot.entries().len()];

        for (idx, entry) in self.snapshot.entries().iter().enumerate() {
            let Some((tier, score)) = self.classify(query, &query_words, entry)? else {
                continue;
            };
            claimed[idx] = true;

            let candidate = Candidate::new(entry.canonical(), score, tier);
            match tier.rank() {
                0 => leading.push((char_len(entry.folded()), candidate)),
                1 => contained.push((char_len(entry.folded()), candidate)),
                _ => worded.push(candidate),
            }
        }

        // Shorter names first, measured on the folded form the query matched.
        // The stable sort keeps directory order on ties.
        leading.sort_by_key(|(len, _)| *len);
        contained.sort_by_key(|(len, _)| *len);
        worded.sort_by(by_score_then_name);

        let mut ranked: Vec<Candidate<'a>> = leading
            .into_iter()
            .chain(contained)
            .map(|(_, candidate)| candidate)
            .collect();
        ranked.append(&mut worded);

        if ranked.len() < limit {
            let mut fuzzy = self.rank_fuzzy(query, &query_words, &claimed, limit, cutoff)?;
            ranked.append(&mut fuzzy);
        }

        Ok(ranked)
    }

    /// Exact and prefix matches only
    fn rank_short(&self, query: &str) -> Vec<Candidate<'a>> {
        let mut matches: Vec<(usize, Candidate<'a>)> = self
            .snapshot
            .entries()
            .iter()
            .filter_map(|entry| {
                let tier = if entry.folded() == query {
                    Tier::Exact
                } else if entry.folded().starts_with(query) {
                    Tier::Prefix
                } else {
                    return None;
                };
                let candidate = Candidate::new(entry.canonical(), fixed(tier), tier);
                Some((char_len(entry.folded()), candidate))
            })
            .collect();

        matches.sort_by(|(len_a, a), (len_b, b)| {
            b.score.total_cmp(&a.score).then(len_a.cmp(len_b))
        });
        matches.into_iter().map(|(_, candidate)| candidate).collect()
    }

    /// First of tiers 1-5 that the entry falls into
    fn classify(
        &self,
        query: &str,
        query_words: &[&str],
        entry: &DirectoryEntry,
    ) -> Result<Option<(Tier, f64)>, ScorerError> {
        let name = entry.folded();

        let tier = if name == query {
            Tier::Exact
        } else if name.starts_with(query) {
            Tier::Prefix
        } else if contains_all_words(name, query_words) {
            Tier::AllWords
        } else if name.contains(query) {
            Tier::Substring
        } else {
            let score = word_match_score(query, name, &self.scorer)?;
            if score > self.config.min_word_score {
                let bonus = score.min(self.config.max_word_bonus);
                return Ok(Some((Tier::WordScore, WORD_TIER_BASE + bonus)));
            }
            return Ok(None);
        };

        Ok(Some((tier, fixed(tier))))
    }

    /// Fuzzy candidates among entries no earlier tier claimed
    fn rank_fuzzy(
        &self,
        query: &str,
        query_words: &[&str],
        claimed: &[bool],
        limit: usize,
        cutoff: f64,
    ) -> Result<Vec<Candidate<'a>>, ScorerError> {
        let remaining: Vec<&'a DirectoryEntry> = self
            .snapshot
            .entries()
            .iter()
            .zip(claimed)
            .filter(|(_, taken)| !**taken)
            .map(|(entry, _)| entry)
            .collect();
        if remaining.is_empty() {
            return Ok(Vec::new());
        }

        let corpus: Vec<&str> = remaining.iter().map(|e| e.folded()).collect();
        let matches = self
            .scorer
            .top_matches(query, &corpus, limit.saturating_mul(2), cutoff)?;

        let mut fuzzy: Vec<Candidate<'a>> = matches
            .into_iter()
            .filter(|m| {
                let name = corpus[m.index];
                // Without a literal word overlap, demand a much closer match
                query_words.iter().any(|w| name.contains(w))
                    || m.score >= self.config.fuzzy_keep_score
            })
            .map(|m| Candidate::new(remaining[m.index].canonical(), m.score, Tier::Fuzzy))
            .collect();

        fuzzy.sort_by(by_score_then_name);
        Ok(fuzzy)
    }
}

fn fixed(tier: Tier) -> f64 {
    tier.fixed_score().unwrap_or_default()
}

/// Every query word appears as a whole word of the name
fn contains_all_words(name: &str, query_words: &[&str]) -> bool {
    if query_words.is_empty() {
        return false;
    }
    let name_words: Vec<&str> = name.split_whitespace().collect();
    query_words.iter().all(|q| name_words.contains(q))
}

/// Descending score, then canonical name
fn by_score_then_name(a: &Candidate<'_>, b: &Candidate<'_>) -> std::cmp::Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.canonical.cmp(b.canonical))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::NameRecord;

    fn people() -> DirectorySnapshot {
        DirectorySnapshot::new(vec![
            NameRecord::new("john smith", "John Smith"),
            NameRecord::new("john smith", "J. Smith"),
            NameRecord::new("johnny appleseed", "Johnny Appleseed"),
        ])
    }

    fn tiers(candidates: &[Candidate<'_>]) -> Vec<(String, Tier)> {
        candidates
            .iter()
            .map(|c| (c.canonical.to_string(), c.tier))
            .collect()
    }

    #[test]
    fn test_prefix_scenario() {
        let snapshot = people();
        let engine = MatchingEngine::new(&snapshot);
        let results = engine.search("john", 10, 40.0).unwrap();
        assert_eq!(results, vec!["J. Smith", "John Smith", "Johnny Appleseed"]);
    }

    #[test]
    fn test_prefix_candidates_sorted_by_length() {
        let snapshot = people();
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("JOHN ", 10, 40.0).unwrap();
        assert_eq!(
            tiers(&candidates),
            vec![
                ("john smith".to_string(), Tier::Prefix),
                ("johnny appleseed".to_string(), Tier::Prefix),
            ]
        );
        assert!(candidates.iter().all(|c| (c.score - 95.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_all_words_scenario() {
        let snapshot = people();
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("smith john", 10, 40.0).unwrap();

        // "johnny appleseed" only shares a word prefix with the query, which
        // is not enough for the word-score or fuzzy tiers
        assert_eq!(
            tiers(&candidates),
            vec![("john smith".to_string(), Tier::AllWords)]
        );
        assert!((candidates[0].score - 90.0).abs() < f64::EPSILON);

        let results = engine.search("smith john", 10, 40.0).unwrap();
        assert_eq!(results, vec!["J. Smith", "John Smith"]);
    }

    #[test]
    fn test_exact_match_first() {
        let snapshot = DirectorySnapshot::new(vec![
            NameRecord::new("ann leeds", "Ann Leeds"),
            NameRecord::new("ann lee", "Ann Lee"),
            NameRecord::new("ann lee", "Annie Lee"),
        ]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("ann lee", 10, 40.0).unwrap();
        assert_eq!(candidates[0].tier, Tier::Exact);
        assert_eq!(candidates[0].canonical, "ann lee");

        let results = engine.search("ann lee", 10, 40.0).unwrap();
        assert_eq!(&results[..2], ["Ann Lee", "Annie Lee"]);
    }

    #[test]
    fn test_substring_tier() {
        let snapshot = DirectorySnapshot::new(vec![NameRecord::new("mary-jane watson", "MJ")]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("jane wat", 10, 40.0).unwrap();
        assert_eq!(candidates[0].tier, Tier::Substring);
        assert!((candidates[0].score - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_word_score_capped() {
        // an exact word and a word prefix score 18, capped at 10 above 80
        let snapshot = DirectorySnapshot::new(vec![NameRecord::new("ada king lovelace", "Ada")]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("ada lovelac", 10, 40.0).unwrap();
        assert_eq!(candidates[0].tier, Tier::WordScore);
        assert!((candidates[0].score - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_query_skips_fuzzy() {
        let snapshot = DirectorySnapshot::new(vec![
            NameRecord::new("jo", "Jo"),
            NameRecord::new("joe", "Joe"),
            NameRecord::new("aj", "AJ"),
        ]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("jo", 10, 0.0).unwrap();
        assert_eq!(
            tiers(&candidates),
            vec![
                ("jo".to_string(), Tier::Exact),
                ("joe".to_string(), Tier::Prefix),
            ]
        );
    }

    #[test]
    fn test_short_query_ignores_word_and_substring_tiers() {
        let snapshot = DirectorySnapshot::new(vec![NameRecord::new("mo jones", "Mo Jones")]);
        let engine = MatchingEngine::new(&snapshot);
        assert!(engine.search("jo", 10, 40.0).unwrap().is_empty());
    }

    #[test]
    fn test_exact_first_when_lowercasing_changes_length() {
        // "İ" lower-cases to two characters, so the raw prefix name is
        // shorter than the exact one but its folded form is longer
        let snapshot = DirectorySnapshot::new(vec![
            NameRecord::new("İİx", "Prefix"),
            NameRecord::new("i\u{307}i\u{307}", "Exact"),
        ]);
        let engine = MatchingEngine::new(&snapshot);

        let candidates = engine.find_candidates("i\u{307}i\u{307}", 10, 40.0).unwrap();
        assert_eq!(candidates[0].tier, Tier::Exact);
        assert_eq!(candidates[1].tier, Tier::Prefix);
        assert_eq!(
            engine.search("i\u{307}i\u{307}", 10, 40.0).unwrap(),
            vec!["Exact", "Prefix"]
        );
    }

    #[test]
    fn test_short_query_exact_first_when_lowercasing_changes_length() {
        let snapshot = DirectorySnapshot::new(vec![
            NameRecord::new("İx", "Prefix"),
            NameRecord::new("i\u{307}", "Exact"),
        ]);
        let engine = MatchingEngine::new(&snapshot);
        assert_eq!(
            engine.search("i\u{307}", 10, 40.0).unwrap(),
            vec!["Exact", "Prefix"]
        );
    }

    #[test]
    fn test_word_score_tier_for_close_spelling() {
        let snapshot = DirectorySnapshot::new(vec![
            NameRecord::new("katherine johnson", "Katherine Johnson"),
            NameRecord::new("zed zed", "Zed Zed"),
        ]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("katharine jonson", 10, 40.0).unwrap();
        assert_eq!(
            tiers(&candidates),
            vec![("katherine johnson".to_string(), Tier::WordScore)]
        );
    }

    #[test]
    fn test_fuzzy_keeps_close_match_without_shared_word() {
        // Run together, the query shares no word with the name and scores
        // under the word-score threshold, but is two edits away
        let snapshot = DirectorySnapshot::new(vec![NameRecord::new(
            "katherine johnson",
            "Katherine Johnson",
        )]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("xkatherinejohnson", 10, 40.0).unwrap();

        assert_eq!(
            tiers(&candidates),
            vec![("katherine johnson".to_string(), Tier::Fuzzy)]
        );
        assert!(candidates[0].score >= engine.config().fuzzy_keep_score);
        assert!(candidates[0].score < 100.0);
    }

    #[test]
    fn test_fuzzy_keeps_weak_match_sharing_a_word() {
        // "ohn" sits inside "john", so the name is kept well under the keep score
        let snapshot = DirectorySnapshot::new(vec![NameRecord::new("john q", "John Q")]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("ohn zzzz", 10, 0.0).unwrap();

        assert_eq!(tiers(&candidates), vec![("john q".to_string(), Tier::Fuzzy)]);
        assert!(candidates[0].score < engine.config().fuzzy_keep_score);
    }

    #[test]
    fn test_fuzzy_requires_overlap_or_high_score() {
        let snapshot = DirectorySnapshot::new(vec![NameRecord::new("bcdefgh", "B")]);
        let engine = MatchingEngine::new(&snapshot);
        // "abcdefg" vs "bcdefgh": similar, but no query word inside the name
        // and a score under the keep threshold
        let candidates = engine.find_candidates("abcdefg", 10, 40.0).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_fuzzy_skips_names_claimed_by_earlier_tiers() {
        let snapshot = DirectorySnapshot::new(vec![
            NameRecord::new("john smith", "John Smith"),
            NameRecord::new("zed zed", "Zed Zed"),
        ]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("john smith", 10, 40.0).unwrap();
        assert_eq!(
            tiers(&candidates),
            vec![("john smith".to_string(), Tier::Exact)]
        );
    }

    #[test]
    fn test_fuzzy_only_runs_under_limit() {
        let snapshot = DirectorySnapshot::new(vec![
            NameRecord::new("katherine johnson", "Katherine Johnson"),
            NameRecord::new("xkatherinejohnson jr", "X. Johnson Jr"),
        ]);
        let engine = MatchingEngine::new(&snapshot);

        let filled = engine.find_candidates("xkatherinejohnson", 1, 40.0).unwrap();
        assert_eq!(
            tiers(&filled),
            vec![("xkatherinejohnson jr".to_string(), Tier::Prefix)]
        );

        let open = engine.find_candidates("xkatherinejohnson", 2, 40.0).unwrap();
        assert_eq!(
            tiers(&open),
            vec![
                ("xkatherinejohnson jr".to_string(), Tier::Prefix),
                ("katherine johnson".to_string(), Tier::Fuzzy),
            ]
        );
    }

    #[test]
    fn test_word_score_tier_orders_by_score() {
        // "jon smithers" scores 90 (capped), "john smith" 87.75; directory
        // and alphabetical order both say otherwise
        let snapshot = DirectorySnapshot::new(vec![
            NameRecord::new("john smith", "John Smith"),
            NameRecord::new("jon smithers", "Jon Smithers"),
        ]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("jon smyth", 10, 40.0).unwrap();

        assert_eq!(
            tiers(&candidates),
            vec![
                ("jon smithers".to_string(), Tier::WordScore),
                ("john smith".to_string(), Tier::WordScore),
            ]
        );
        assert!(candidates[0].score > candidates[1].score);
    }

    #[test]
    fn test_word_score_ties_ordered_by_name() {
        let snapshot = DirectorySnapshot::new(vec![
            NameRecord::new("ada king lovelace", "Ada King"),
            NameRecord::new("ada byron lovelace", "Ada Byron"),
        ]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("ada lovelac", 10, 40.0).unwrap();

        assert_eq!(
            tiers(&candidates),
            vec![
                ("ada byron lovelace".to_string(), Tier::WordScore),
                ("ada king lovelace".to_string(), Tier::WordScore),
            ]
        );
        assert!((candidates[0].score - candidates[1].score).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fuzzy_tier_orders_by_score() {
        // three edits for "johnsen", two for "johnson"
        let snapshot = DirectorySnapshot::new(vec![
            NameRecord::new("katherine johnsen", "Katherine Johnsen"),
            NameRecord::new("katherine johnson", "Katherine Johnson"),
        ]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("xkatherinejohnson", 10, 40.0).unwrap();

        assert_eq!(
            tiers(&candidates),
            vec![
                ("katherine johnson".to_string(), Tier::Fuzzy),
                ("katherine johnsen".to_string(), Tier::Fuzzy),
            ]
        );
        assert!(candidates[0].score > candidates[1].score);
    }

    #[test]
    fn test_fuzzy_ties_ordered_by_name() {
        let snapshot = DirectorySnapshot::new(vec![
            NameRecord::new("katherine johnsob", "Katherine Johnsob"),
            NameRecord::new("katherine johnsoa", "Katherine Johnsoa"),
        ]);
        let engine = MatchingEngine::new(&snapshot);
        let candidates = engine.find_candidates("xkatherinejohnson", 10, 40.0).unwrap();

        assert_eq!(
            tiers(&candidates),
            vec![
                ("katherine johnsoa".to_string(), Tier::Fuzzy),
                ("katherine johnsob".to_string(), Tier::Fuzzy),
            ]
        );
        assert!((candidates[0].score - candidates[1].score).abs() < f64::EPSILON);
    }

    #[test]
    fn test_limit_zero_is_empty() {
        let snapshot = people();
        let engine = MatchingEngine::new(&snapshot);
        assert!(engine.search("john", 0, 40.0).unwrap().is_empty());
    }

    #[test]
    fn test_blank_query_is_invalid() {
        let snapshot = people();
        let engine = MatchingEngine::new(&snapshot);
        assert!(matches!(
            engine.search("   ", 10, 40.0),
            Err(SearchError::InvalidInput)
        ));
    }

    #[test]
    fn test_empty_directory_returns_nothing() {
        let snapshot = DirectorySnapshot::empty();
        let engine = MatchingEngine::new(&snapshot);
        assert!(engine.search("anyone", 10, 40.0).unwrap().is_empty());
        assert!(engine.search("an", 10, 40.0).unwrap().is_empty());
    }

    #[test]
    fn test_search_default_uses_config() {
        let snapshot = people();
        let config = MatchingConfig {
            default_limit: 1,
            ..MatchingConfig::default()
        };
        let engine = MatchingEngine::with_config(&snapshot, config);
        assert_eq!(engine.search_default("john").unwrap(), vec!["J. Smith"]);
    }

    #[test]
    fn test_case_insensitive_against_canonical() {
        let snapshot =
            DirectorySnapshot::new(vec![NameRecord::new("Grace Hopper", "Grace Hopper")]);
        let engine = MatchingEngine::new(&snapshot);
        assert_eq!(engine.search("grace", 10, 40.0).unwrap(), vec!["Grace Hopper"]);
    }

    struct FailingScorer;

    impl SimilarityScorer for FailingScorer {
        fn ratio(&self, _a: &str, _b: &str) -> Result<f64, ScorerError> {
            Err(ScorerError::Failed("exhausted".to_string()))
        }
    }

    #[test]
    fn test_scorer_failure_is_surfaced() {
        let snapshot = DirectorySnapshot::new(vec![NameRecord::new("zed zed", "Zed Zed")]);
        let engine =
            MatchingEngine::with_scorer(&snapshot, FailingScorer, MatchingConfig::default());
        assert!(matches!(
            engine.search("katherine", 10, 40.0),
            Err(SearchError::Scorer(_))
        ));
    }

    #[test]
    fn test_scorer_not_needed_for_literal_matches() {
        let snapshot = people();
        let engine =
            MatchingEngine::with_scorer(&snapshot, FailingScorer, MatchingConfig::default());
        assert_eq!(engine.search("jo", 10, 40.0).unwrap().len(), 3);
    }
}
