use serde::{Deserialize, Serialize};

/// Stage of the match cascade that produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Canonical name equals the query
    Exact,
    /// Canonical name starts with the query
    Prefix,
    /// Every query word is a whole word of the canonical name
    AllWords,
    /// Query appears anywhere inside the canonical name
    Substring,
    /// Word-by-word comparison scored above the threshold
    WordScore,
    /// Edit-distance fallback
    Fuzzy,
}

impl Tier {
    /// Position of the tier's group in the final ordering (lower comes first).
    ///
    /// Exact and prefix matches share a group, as do all-words and substring
    /// matches.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Exact | Self::Prefix => 0,
            Self::AllWords | Self::Substring => 1,
            Self::WordScore => 2,
            Self::Fuzzy => 3,
        }
    }

    /// Fixed score assigned by the tier, if it has one.
    ///
    /// Word-score and fuzzy candidates are scored individually.
    #[must_use]
    pub fn fixed_score(self) -> Option<f64> {
        match self {
            Self::Exact => Some(100.0),
            Self::Prefix => Some(95.0),
            Self::AllWords => Some(90.0),
            Self::Substring => Some(85.0),
            Self::WordScore | Self::Fuzzy => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Prefix => write!(f, "prefix"),
            Self::AllWords => write!(f, "all-words"),
            Self::Substring => write!(f, "substring"),
            Self::WordScore => write!(f, "word-score"),
            Self::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// A canonical name matched by one query.
///
/// Borrows the canonical key from the snapshot it was found in, so a
/// candidate can never outlive or point outside that snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub canonical: &'a str,
    pub score: f64,
    pub tier: Tier,
}

impl<'a> Candidate<'a> {
    #[must_use]
    pub fn new(canonical: &'a str, score: f64, tier: Tier) -> Self {
        Self {
            canonical,
            score,
            tier,
        }
    }
}
