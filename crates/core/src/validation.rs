//! Intake validation errors and field helpers.
//!
//! Submissions arrive as loosely-typed JSON; these helpers turn the raw
//! optional fields into the values the store accepts, or a
//! [`ValidationError`] describing what the client got wrong.

use crate::review::{MAX_RATING, MIN_RATING};

/// A client-caused rejection of a submission. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent, null, or blank.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// The rating could not be parsed as an integer, or fell outside the
    /// accepted star range.
    #[error("Rating must be between {} and {} stars", MIN_RATING, MAX_RATING)]
    RatingOutOfRange,
}

/// Require a non-blank text field, returning it unchanged.
///
/// Whitespace-only values count as missing, but accepted values are not
/// trimmed: what the client sent is what gets stored.
pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ValidationError::MissingField { field }),
    }
}

/// Collapse an empty optional text field to `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
