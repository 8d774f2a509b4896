//! Review models.

use ctrl_core::review::{parse_rating, ReviewStatus};
use ctrl_core::types::{DbId, Timestamp};
use ctrl_core::validation::{non_empty, require_text, ValidationError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub name: String,
    pub title: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
    pub is_approved: bool,
}

impl Review {
    pub fn status(&self) -> ReviewStatus {
        ReviewStatus::from_approved(self.is_approved)
    }
}

/// Raw body of a review submission, before validation.
///
/// `rating` stays untyped so that both `5` and `"5"` reach the parser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewSubmission {
    pub name: Option<String>,
    pub title: Option<String>,
    pub rating: Option<serde_json::Value>,
    pub comment: Option<String>,
}

impl ReviewSubmission {
    /// Validate the submission into a pending [`CreateReview`].
    pub fn validate(self) -> Result<CreateReview, ValidationError> {
        let name = require_text("name", self.name)?;
        let comment = require_text("comment", self.comment)?;
        let rating = parse_rating(self.rating.as_ref())?;

        Ok(CreateReview {
            name,
            title: non_empty(self.title),
            rating,
            comment,
            is_approved: false,
        })
    }
}

/// DTO for inserting a review.
#[derive(Debug, Clone)]
pub struct CreateReview {
    pub name: String,
    pub title: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub is_approved: bool,
}
