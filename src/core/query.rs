/// Fold a raw query into the form used for matching.
///
/// Trims surrounding whitespace and lower-cases. Internal punctuation and
/// spacing are left alone, so `"  O'Brien  "` becomes `"o'brien"`.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of characters in a string, as opposed to its byte length.
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
