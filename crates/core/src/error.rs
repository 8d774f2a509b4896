use crate::types::DbId;
use crate::validation::ValidationError;

/// Domain errors shared by the DB and API layers.
///
/// `NotFound` is never produced by approve or delete, which treat a missing
/// id as success.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}
