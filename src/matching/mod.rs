//! Name matching engine.
//!
//! - [`MatchingEngine`]: runs the match cascade over one directory snapshot
//! - [`word_match_score`]: word-by-word phrase comparison
//! - [`SimilarityScorer`]: pluggable edit-distance similarity
//! - [`DisplayNames`]: expands ranked canonical names into display names
//!
//! ## Match cascade
//!
//! Every canonical name lands in the first tier it qualifies for:
//!
//! | Tier        | Rule                                          | Score         |
//! |-------------|-----------------------------------------------|---------------|
//! | Exact       | name equals the query                         | 100           |
//! | Prefix      | name starts with the query                    | 95            |
//! | All-words   | every query word is a word of the name        | 90            |
//! | Substring   | query appears inside the name                 | 85            |
//! | Word-score  | word score above 5                            | 80 + min(s, 10) |
//! | Fuzzy       | similarity search, only if the limit is unmet | similarity    |
//!
//! Queries shorter than three characters only get exact and prefix matches.
//!
//! Results come out grouped as exact+prefix, all-words+substring, word-score,
//! fuzzy. The first two groups are ordered by name length, shortest first;
//! the last two by descending score, then by name.
//!
//! ## Example
//!
//! ```rust
//! use name_resolver::{DirectorySnapshot, MatchingEngine, NameRecord};
//!
//! let snapshot = DirectorySnapshot::new(vec![
//!     NameRecord::new("john smith", "John Smith"),
//!     NameRecord::new("john smith", "J. Smith"),
//!     NameRecord::new("johnny appleseed", "Johnny Appleseed"),
//! ]);
//!
//! let engine = MatchingEngine::new(&snapshot);
//! let names = engine.search("john", 10, 40.0).unwrap();
//! assert_eq!(names, ["J. Smith", "John Smith", "Johnny Appleseed"]);
//! ```

pub mod engine;
pub mod resolver;
pub mod similarity;
pub mod words;

pub use engine::{MatchingConfig, MatchingEngine, SearchError, DEFAULT_CUTOFF, DEFAULT_LIMIT};
pub use resolver::DisplayNames;
pub use similarity::{CorpusMatch, EditDistanceScorer, ScorerError, SimilarityScorer};
pub use words::word_match_score;
