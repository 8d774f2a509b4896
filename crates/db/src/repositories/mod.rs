//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Every method issues exactly
//! one statement, so each call is atomic at the storage layer.

pub mod early_access_repo;
pub mod review_repo;

pub use early_access_repo::EarlyAccessRepo;
pub use review_repo::ReviewRepo;
