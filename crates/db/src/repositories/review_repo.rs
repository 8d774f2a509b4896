//! Repository for the `reviews` table.

use chrono::Utc;
use ctrl_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::review::{CreateReview, Review};

/// Column list for reviews queries.
const COLUMNS: &str = "id, name, title, rating, comment, created_at, is_approved";

/// Newest first; rows created within the same instant fall back to id.
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

/// Provides the moderation operations over reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (name, title, rating, comment, created_at, is_approved)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(&input.name)
            .bind(&input.title)
            .bind(input.rating)
            .bind(&input.comment)
            .bind(Utc::now())
            .bind(input.is_approved)
            .fetch_one(pool)
            .await
    }

    /// Find a review by its ID, in either state.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = ?");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List approved reviews only, newest first. This is the public listing.
    pub async fn list_approved(pool: &SqlitePool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE is_approved = TRUE {NEWEST_FIRST}");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    /// List every review regardless of state, newest first. Admin only.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews {NEWEST_FIRST}");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    /// Mark a review approved.
    ///
    /// Idempotent: approving an approved review, or an id that does not
    /// exist, succeeds. Returns `true` only when a pending review changed
    /// state.
    pub async fn approve(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE reviews SET is_approved = TRUE WHERE id = ? AND is_approved = FALSE")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a review in any state.
    ///
    /// Idempotent: deleting a missing id succeeds. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
