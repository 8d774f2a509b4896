//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers validate input through the intake DTOs, delegate to the
//! corresponding repository in `ctrl_db`, and map errors via [`AppError`].

pub mod early_access;
pub mod reviews;

use ctrl_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Parse a raw `{id}` path segment.
///
/// Ids are extracted as strings so a blank or non-numeric id produces the
/// same JSON 400 as every other client error.
fn parse_path_id(raw: &str, missing: &'static str) -> AppResult<DbId> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| AppError::BadRequest(missing.to_string()))
}
