//! Domain types, errors and intake validation shared by the CTRL backend.
//!
//! Nothing in this crate performs I/O; the DB and API layers call into it.

pub mod error;
pub mod review;
pub mod types;
pub mod validation;
