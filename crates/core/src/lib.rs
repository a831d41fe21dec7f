//! Domain logic for the issue tracker.
//!
//! Everything here is free of I/O: the database and HTTP crates call into
//! these types and functions from their write and read paths.

pub mod duration;
pub mod error;
pub mod issue_state;
pub mod lifecycle;
pub mod permissions;
pub mod stats;
pub mod types;
pub mod validation;
