//! Shared response bodies for API handlers.
//!
//! Mutations answer with a `{ "success": true, ... }` object; listings
//! return bare JSON arrays.

use ctrl_core::types::DbId;
use serde::Serialize;

/// `{ "success": true }` acknowledgment for approve and delete.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Acknowledgment for a newly created record.
///
/// `message` is omitted from the JSON when absent.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}
