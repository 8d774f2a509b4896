//! Repository for the `early_access_requests` table.

use chrono::Utc;
use ctrl_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::early_access::{CreateEarlyAccessRequest, EarlyAccessRequest};

/// Column list for early_access_requests queries.
const COLUMNS: &str = "id, name, email, role, message, created_at";

/// Provides create, list and delete for early-access requests.
pub struct EarlyAccessRepo;

impl EarlyAccessRepo {
    /// Insert a new request, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateEarlyAccessRequest,
    ) -> Result<EarlyAccessRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO early_access_requests (name, email, role, message, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EarlyAccessRequest>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.message)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a request by its ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<EarlyAccessRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM early_access_requests WHERE id = ?");
        sqlx::query_as::<_, EarlyAccessRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all requests, newest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<EarlyAccessRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM early_access_requests ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, EarlyAccessRequest>(&query)
            .fetch_all(pool)
            .await
    }

    /// Remove a request. Deleting a missing id succeeds; returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM early_access_requests WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
