//! Centralized validation of request parameters.

use crate::core::query::char_len;

/// Maximum query length in characters (DOS protection for the fuzzy tier)
pub const MAX_QUERY_LENGTH: usize = 256;

/// Maximum number of results a single request may ask for
pub const MAX_LIMIT: usize = 100;

/// Validation error types
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Empty query provided")]
    EmptyQuery,
    #[error("Query too long: exceeds {MAX_QUERY_LENGTH} characters")]
    QueryTooLong,
    #[error("Query contains control characters")]
    InvalidCharacters,
    #[error("Cutoff must be between 0 and 100")]
    CutoffOutOfRange,
}

/// Validate a raw query before it reaches the matcher.
///
/// # Errors
///
/// Returns `ValidationError::EmptyQuery` if the query is blank,
/// `ValidationError::QueryTooLong` if it exceeds the limit, or
/// `ValidationError::InvalidCharacters` if it contains control characters.
pub fn validate_query(query: &str) -> Result<(), ValidationError> {
    if query.trim().is_empty() {
        return Err(ValidationError::EmptyQuery);
    }

    if char_len(query) > MAX_QUERY_LENGTH {
        return Err(ValidationError::QueryTooLong);
    }

    // Tabs and newlines are plain whitespace to the matcher
    if query
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
    {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(())
}

/// Validate a fuzzy cutoff.
///
/// # Errors
///
/// Returns `ValidationError::CutoffOutOfRange` unless the cutoff is a finite
/// number in [0, 100].
pub fn validate_cutoff(cutoff: f64) -> Result<f64, ValidationError> {
    if cutoff.is_finite() && (0.0..=100.0).contains(&cutoff) {
        Ok(cutoff)
    } else {
        Err(ValidationError::CutoffOutOfRange)
    }
}

/// Clamp a requested result limit to [`MAX_LIMIT`]
#[must_use]
pub fn clamp_limit(limit: usize) -> usize {
    limit.min(MAX_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_query_ok() {
        assert!(validate_query("john").is_ok());
        assert!(validate_query("  O'Brien-Smyth ").is_ok());
        assert!(validate_query("jean\tluc").is_ok());
        assert!(validate_query("zoë").is_ok());
    }

    #[test]
    fn test_validate_query_empty() {
        assert_eq!(validate_query(""), Err(ValidationError::EmptyQuery));
        assert_eq!(validate_query(" \n "), Err(ValidationError::EmptyQuery));
    }

    #[test]
    fn test_validate_query_too_long() {
        let at_limit = "a".repeat(MAX_QUERY_LENGTH);
        assert!(validate_query(&at_limit).is_ok());

        let over = "a".repeat(MAX_QUERY_LENGTH + 1);
        assert_eq!(validate_query(&over), Err(ValidationError::QueryTooLong));
    }

    #[test]
    fn test_validate_query_control_chars() {
        assert_eq!(
            validate_query("john\0smith"),
            Err(ValidationError::InvalidCharacters)
        );
        assert_eq!(
            validate_query("john\x1bsmith"),
            Err(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_validate_cutoff() {
        assert_eq!(validate_cutoff(0.0), Ok(0.0));
        assert_eq!(validate_cutoff(40.0), Ok(40.0));
        assert_eq!(validate_cutoff(100.0), Ok(100.0));
        assert!(validate_cutoff(-1.0).is_err());
        assert!(validate_cutoff(100.5).is_err());
        assert!(validate_cutoff(f64::NAN).is_err());
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(0), 0);
        assert_eq!(clamp_limit(10), 10);
        assert_eq!(clamp_limit(MAX_LIMIT + 50), MAX_LIMIT);
    }
}
