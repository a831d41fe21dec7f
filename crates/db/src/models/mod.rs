//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and partial updates
//! - Read-side projections used by the API where they differ from the row

pub mod category;
pub mod issue;
pub mod user;
