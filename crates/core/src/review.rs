//! Review lifecycle constants and rating parsing.
//!
//! A review is either pending (awaiting moderation, hidden from the public
//! listing) or approved. Approval is one-way; deletion removes the record
//! from either state.

use serde_json::Value;

use crate::validation::ValidationError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

/// Acknowledgment returned to the submitter of a new review.
pub const REVIEW_SUBMITTED_MESSAGE: &str =
    "Thank you for your review! It will be displayed after approval.";

/* --------------------------------------------------------------------------
Lifecycle
-------------------------------------------------------------------------- */

/// Moderation state of a review, derived from its `is_approved` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Approved,
}

impl ReviewStatus {
    pub fn from_approved(is_approved: bool) -> Self {
        if is_approved {
            Self::Approved
        } else {
            Self::Pending
        }
    }

    /// Whether the public listing may show a review in this state.
    pub fn is_public(self) -> bool {
        self == Self::Approved
    }
}

/* --------------------------------------------------------------------------
Rating parsing
-------------------------------------------------------------------------- */

/// Parse a raw JSON rating into a star count.
///
/// Absent, `null` and empty-string ratings are missing. Otherwise the leading
/// integer is taken: numbers are truncated toward zero and strings are read up
/// to their first non-digit, so `4.5` and `"4 stars"` both give 4. The result
/// must fall inside `MIN_RATING..=MAX_RATING`.
pub fn parse_rating(raw: Option<&Value>) -> Result<i32, ValidationError> {
    let parsed = match raw {
        None | Some(Value::Null) => {
            return Err(ValidationError::MissingField { field: "rating" });
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(ValidationError::MissingField { field: "rating" });
        }
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Some(Value::String(s)) => leading_integer(s),
        Some(_) => None,
    };

    match parsed {
        Some(stars) if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&stars) => {
            i32::try_from(stars).map_err(|_| ValidationError::RatingOutOfRange)
        }
        _ => Err(ValidationError::RatingOutOfRange),
    }
}

/// Optional sign followed by the leading ASCII digits of `s`, after trimming.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => ("-", &s[1..]),
        Some(b'+') => ("", &s[1..]),
        _ => ("", s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    format!("{sign}{}", &rest[..digits]).parse().ok()
}
