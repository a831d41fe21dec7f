//! Domain error type shared by the database and HTTP crates.

use crate::types::DbId;

/// Errors raised by domain logic and surfaced through the API error layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row of the given kind exists with this id.
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller-supplied input failed a domain rule.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A stored state code is not one of the known issue states.
    #[error("Unknown issue state code '{0}'")]
    UnknownState(String),

    /// The operation clashes with existing data, e.g. a duplicate name.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Valid credentials without the privilege the operation needs.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A broken invariant with no client-facing explanation.
    #[error("Internal error: {0}")]
    Internal(String),
}
