//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated principal from a JWT Bearer token.
//! - [`rbac::RequireStaff`] -- Requires an account allowed to view and create issues.
//! - [`rbac::RequireSuperuser`] -- Requires an account allowed to change reference data.

pub mod auth;
pub mod rbac;
