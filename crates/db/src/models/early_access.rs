//! Early-access request models.

use ctrl_core::types::{DbId, Timestamp};
use ctrl_core::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `early_access_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EarlyAccessRequest {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

/// Raw body of an early-access signup, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EarlyAccessSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub message: Option<String>,
}

impl EarlyAccessSubmission {
    /// Validate the submission. An absent message is stored as `""`.
    pub fn validate(self) -> Result<CreateEarlyAccessRequest, ValidationError> {
        Ok(CreateEarlyAccessRequest {
            name: require_text("name", self.name)?,
            email: require_text("email", self.email)?,
            role: require_text("role", self.role)?,
            message: self.message.unwrap_or_default(),
        })
    }
}

/// DTO for inserting an early-access request.
#[derive(Debug, Clone)]
pub struct CreateEarlyAccessRequest {
    pub name: String,
    pub email: String,
    pub role: String,
    pub message: String,
}
