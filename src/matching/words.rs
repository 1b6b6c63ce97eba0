use super::similarity::{ScorerError, SimilarityScorer};

/// Score for a query word equal to a name word
pub const EXACT_WORD: f64 = 10.0;
/// Score for a name word starting with the query word
pub const NAME_WORD_PREFIX: f64 = 8.0;
/// Score for a query word starting with the name word
pub const QUERY_WORD_PREFIX: f64 = 6.0;
/// Score for a name word containing the query word
pub const NAME_WORD_CONTAINS: f64 = 4.0;
/// Divisor mapping a [0, 100] similarity onto [0, 5]
const SIMILARITY_DIVISOR: f64 = 20.0;

/// Score how well the words of `query` match the words of `name`.
///
/// Each query word takes the best score it gets against any name word. The
/// sum is multiplied by the fraction of query words that scored above zero,
/// so a phrase with unmatched words is discounted. Both inputs are expected
/// to be lower-cased already.
///
/// Returns 0 when either side has no words.
pub fn word_match_score<S: SimilarityScorer + ?Sized>(
    query: &str,
    name: &str,
    scorer: &S,
) -> Result<f64, ScorerError> {
    let query_words: Vec<&str> = query.split_whitespace().collect();
    let name_words: Vec<&str> = name.split_whitespace().collect();

    if query_words.is_empty() || name_words.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0.0;
    let mut matched = 0usize;

    for query_word in &query_words {
        let mut best = 0.0f64;
        for name_word in &name_words {
            best = best.max(word_pair_score(query_word, name_word, scorer)?);
        }

        if best > 0.0 {
            matched += 1;
            total += best;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let coverage = matched as f64 / query_words.len() as f64;
    Ok(total * coverage)
}

/// Score one query word against one name word, first rule that applies wins
fn word_pair_score<S: SimilarityScorer + ?Sized>(
    query_word: &str,
    name_word: &str,
    scorer: &S,
) -> Result<f64, ScorerError> {
    let score = if query_word == name_word {
        EXACT_WORD
    } else if name_word.starts_with(query_word) {
        NAME_WORD_PREFIX
    } else if query_word.starts_with(name_word) {
        QUERY_WORD_PREFIX
    } else if name_word.contains(query_word) {
        NAME_WORD_CONTAINS
    } else {
        scorer.ratio(query_word, name_word)? / SIMILARITY_DIVISOR
    };
    Ok(score)
}
