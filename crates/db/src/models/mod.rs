//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` submission struct holding the raw request body
//! - A validated create DTO for inserts

pub mod early_access;
pub mod review;
